use brook::interpolation::errors::InterpolationError;
use brook::interpolation::lagrange::{interpolate, LagrangeCfg};
use brook::interpolation::table::{render, sig3};

type BrookResult = Result<(), InterpolationError>;

const NODE_X: [f64; 10] = [0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9];
const NODE_Y: [f64; 10] = [2.3, 4.5, 4.3, 4.1, 6.7, 6.5, 6.2, 10.5, 10.2, 9.8];

#[test]
fn sig3_precision_tracks_magnitude() {
    assert_eq!(sig3(2.3), "2.30");
    assert_eq!(sig3(9.8), "9.80");
    assert_eq!(sig3(10.5), "10.5");
    assert_eq!(sig3(123.0), "123");
    assert_eq!(sig3(0.0), "0.00");
    assert_eq!(sig3(-4.56), "-4.56");
}

#[test]
fn header_and_separator() {
    let out = render(&[], &[]);
    let mut lines = out.lines();
    assert_eq!(lines.next(), Some("x\tP(x)"));
    assert_eq!(lines.next(), Some("-------------"));
    assert_eq!(lines.next(), None);
}

#[test]
fn row_formatting() {
    let out = render(&[0.0, 0.25], &[2.3, 10.5]);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines[2], "0.00\t    2.30");
    assert_eq!(lines[3], "0.25\t    10.5");

    // first column is fixed 2-decimal
    assert!(lines[2].starts_with("0.00\t"));
}

#[test]
fn full_table_end_to_end() -> BrookResult {
    let samples: Vec<f64> = (0..100).map(|i| i as f64 * 0.01).collect();

    let cfg = LagrangeCfg::new()
        .set_x(&NODE_X)?
        .set_y(&NODE_Y)?
        .set_x_eval(&samples)?;
    let rep = interpolate(cfg)?;

    let out = render(&samples, &rep.evaluated);
    let lines: Vec<&str> = out.lines().collect();

    // header + separator + 100 data rows
    assert_eq!(lines.len(), 102);
    assert_eq!(lines[2], "0.00\t    2.30");
    assert!(lines.last().unwrap().starts_with("0.99\t"));
    Ok(())
}
