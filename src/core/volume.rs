use crate::domain::decimal::Decimal;

/// `pi × r² × h`, exact. The result scale is the sum of the input scales.
pub fn cylinder_volume(radius: &Decimal, height: &Decimal, pi: &Decimal) -> Decimal {
    let base = pi * &(radius * radius);
    &base * height
}
