//! Cost ledger: the two operational-cost counters shown over the animation.
//!
//! Each launch costs the friendly side an interceptor; each explosion
//! notification is booked against the opposing side. Explosion
//! notifications arrive once per rendered frame per live explosion, so the
//! OPFOR counter falls continuously while a flash is on screen.

use serde::Serialize;

use ungoliant_core::events::SimEvent;

/// Cost booked to the friendly counter per missile launch.
pub const MISSILE_COST: i64 = 500_000;

/// Cost booked to the OPFOR counter per explosion notification.
pub const EXPLOSION_COST: i64 = 1_000;

/// Running totals; both only ever decrease from zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CostLedger {
    pub friendly: i64,
    pub opfor: i64,
    pub missiles_fired: u64,
    pub explosion_frames: u64,
}

impl CostLedger {
    pub fn apply(&mut self, event: SimEvent) {
        match event {
            SimEvent::MissileFired => {
                self.friendly -= MISSILE_COST;
                self.missiles_fired += 1;
            }
            SimEvent::Explosion => {
                self.opfor -= EXPLOSION_COST;
                self.explosion_frames += 1;
            }
        }
    }

    /// Friendly spend over OPFOR spend to one decimal, or `"0.0"` while
    /// either side is still at zero.
    pub fn asymmetry_ratio(&self) -> String {
        if self.friendly == 0 || self.opfor == 0 {
            return "0.0".to_string();
        }
        format!("{:.1}", self.friendly as f64 / self.opfor as f64)
    }
}

impl Extend<SimEvent> for CostLedger {
    fn extend<I: IntoIterator<Item = SimEvent>>(&mut self, iter: I) {
        for event in iter {
            self.apply(event);
        }
    }
}

/// Dollar amount with thousands separators, e.g. `$-1,500,000`.
pub fn format_amount(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0 { "-" } else { "" };
    format!("${sign}{grouped}")
}
