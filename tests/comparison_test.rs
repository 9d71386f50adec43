use anyhow::Result;
use num::BigInt;
use pi_precision::core::approx::{round_digits, truncate_digits};
use pi_precision::core::report::{CONCLUSION, DIFFERENCE_PLACES};
use pi_precision::core::PiSource;
use pi_precision::{
    ComparisonEngine, Decimal, DefaultParameters, DigitString, MachinPi, PrecisionContext,
    RoundingMode,
};

const PI_200: &str = "3.\
    14159265358979323846264338327950288419716939937510\
    58209749445923078164062862089986280348253421170679\
    82148086513282306647093844609550582231725359408128\
    48111745028410270193852110555964462294895493038196";

fn pi_digits() -> Result<DigitString> {
    let mut ctx = PrecisionContext::new(150);
    Ok(MachinPi.pi(&mut ctx)?.to_digits())
}

fn half_unit(places: usize) -> Decimal {
    // 0.5 × 10^-N
    Decimal::new(BigInt::from(5), places + 1)
}

#[test]
fn test_truncated_and_rounded_bracket_pi() -> Result<()> {
    let pi = pi_digits()?;
    let reference: Decimal = PI_200.parse()?;

    for n in [20, 40, 60, 100] {
        let truncated = Decimal::from_digits(&truncate_digits(&pi, n)?);
        let rounded = Decimal::from_digits(&round_digits(&pi, n, RoundingMode::HalfAwayFromZero)?);

        assert!(truncated <= reference, "N={}", n);
        assert!(truncated <= rounded, "N={}", n);
        assert!((&rounded - &reference).abs() <= half_unit(n), "N={}", n);
        assert!(reference <= &rounded + &half_unit(n), "N={}", n);
    }
    Ok(())
}

#[test]
fn test_twenty_decimals_round_down() -> Result<()> {
    let pi = pi_digits()?;
    let truncated = truncate_digits(&pi, 20)?;
    let rounded = round_digits(&pi, 20, RoundingMode::HalfAwayFromZero)?;

    assert_eq!(truncated.to_string(), "3.14159265358979323846");
    assert_eq!(truncated, rounded);
    Ok(())
}

#[test]
fn test_forty_decimals_round_up_one_unit() -> Result<()> {
    let pi = pi_digits()?;
    assert!(pi.fraction().as_bytes()[40] >= b'5');

    let truncated = Decimal::from_digits(&truncate_digits(&pi, 40)?);
    let rounded = Decimal::from_digits(&round_digits(&pi, 40, RoundingMode::HalfAwayFromZero)?);
    assert_eq!(&rounded - &truncated, Decimal::new(BigInt::from(1), 40));
    Ok(())
}

#[test]
fn test_fixed_places_round_trip() -> Result<()> {
    let pi = pi_digits()?;
    for n in [20, 40, 60, 100] {
        for approx in [
            truncate_digits(&pi, n)?,
            round_digits(&pi, n, RoundingMode::HalfEven)?,
        ] {
            let value = Decimal::from_digits(&approx);
            let text = value.format_fixed(n, RoundingMode::HalfAwayFromZero)?;
            let reparsed: Decimal = text.parse()?;
            assert_eq!(reparsed, value);
            assert_eq!(reparsed.scale(), n);
        }
    }
    Ok(())
}

#[test]
fn test_default_report_volumes() -> Result<()> {
    let report = ComparisonEngine::new(DefaultParameters).run()?;

    let first = &report.rows[0];
    assert_eq!(first.truncated_volume.to_string(), "785.39816339744830961500");
    assert_eq!(first.rounded_volume, first.truncated_volume);
    assert!(first.difference.is_zero());

    // r²h = 250, so one unit at N places becomes 2.5 × 10^-(N-2)
    for row in &report.rows[1..] {
        assert_eq!(row.difference, Decimal::new(BigInt::from(250), row.decimals));
    }
    Ok(())
}

#[test]
fn test_default_report_text() -> Result<()> {
    let text = ComparisonEngine::new(DefaultParameters).run()?.render_text()?;

    assert!(text.starts_with("--- SET 1: TRUNCATION ---\n20    | 785.39816339744830961500\n"));

    let difference_rows: Vec<&str> = text
        .lines()
        .skip_while(|line| !line.contains("DIFFERENCE"))
        .skip(1)
        .take(4)
        .collect();
    assert_eq!(difference_rows.len(), 4);
    for line in &difference_rows {
        let (_, value) = line.split_once(" | ").unwrap();
        let (_, fraction) = value.split_once('.').unwrap();
        assert_eq!(fraction.len(), DIFFERENCE_PLACES);
        assert!(!value.contains('e'));
    }

    assert_eq!(difference_rows[0], format!("20    | 0.{}", "0".repeat(100)));
    assert_eq!(
        difference_rows[1],
        format!("40    | 0.{}25{}", "0".repeat(37), "0".repeat(61))
    );
    assert_eq!(
        difference_rows[3],
        format!("100   | 0.{}25{}", "0".repeat(97), "0".repeat(1))
    );

    for line in CONCLUSION {
        assert_eq!(text.matches(line).count(), 1);
    }
    assert!(text.find("CONCLUSION").unwrap() > text.find("DIFFERENCE").unwrap());
    Ok(())
}
