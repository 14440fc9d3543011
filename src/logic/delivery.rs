use chrono::{DateTime, Duration, Months, Utc};
use rand::Rng;

pub const DELIVERY_LEAD_MONTHS: u32 = 6;
pub const MAX_OFFSET_DAYS: i64 = 100;

/// Source of the day offset applied to the nominal delivery date.
pub trait DeliveryOffset: Send + Sync {
    fn offset_days(&self) -> i64;
}

/// Uniform draw in `[-MAX_OFFSET_DAYS, MAX_OFFSET_DAYS]`, independent per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomOffset;

impl DeliveryOffset for RandomOffset {
    fn offset_days(&self) -> i64 {
        rand::thread_rng().gen_range(-MAX_OFFSET_DAYS..=MAX_OFFSET_DAYS)
    }
}

/// Always returns the same offset, clamped to the allowed range.
#[derive(Debug, Clone, Copy)]
pub struct FixedOffset(pub i64);

impl DeliveryOffset for FixedOffset {
    fn offset_days(&self) -> i64 {
        self.0.clamp(-MAX_OFFSET_DAYS, MAX_OFFSET_DAYS)
    }
}

/// Nominal delivery date: six calendar months after the order, saturating at the
/// largest representable timestamp.
pub fn nominal_delivery(order_date: DateTime<Utc>) -> DateTime<Utc> {
    order_date
        .checked_add_months(Months::new(DELIVERY_LEAD_MONTHS))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Nominal date shifted by the offset. Never earlier than `order_date`.
pub fn expected_delivery(order_date: DateTime<Utc>, offset: &dyn DeliveryOffset) -> DateTime<Utc> {
    let nominal = nominal_delivery(order_date);
    nominal
        .checked_add_signed(Duration::days(offset.offset_days()))
        .unwrap_or(nominal)
        .max(order_date)
}
