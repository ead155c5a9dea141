//! Two-column text table for interpolation results.
//!
//! Renders `(x, P(x))` rows the way the classical hand-worked tables print
//! them: x fixed to 2 decimals, P(x) to 3 significant digits, right-aligned.

/// Formats `v` to 3 significant digits.
///
/// Decimal places shrink as the integer part grows (`2.30`, `10.5`, `123`);
/// magnitudes below 1 keep 2 decimals. Non-finite values format as-is.
pub fn sig3(v: f64) -> String {
    if !v.is_finite() {
        return format!("{v}");
    }

    let mag = v.abs();
    let int_digits = if mag < 1.0 {
        1
    } else {
        mag.log10().floor() as i32 + 1
    };
    let prec = (3 - int_digits).max(0) as usize;

    format!("{v:.prec$}")
}

/// Renders the sample/value table.
///
/// Header row `x` TAB `P(x)`, a dash separator, then one row per sample:
/// the sample to 2 decimal places, TAB, the value via [`sig3`] right-aligned
/// in an 8-character field.
///
/// `samples` and `values` must be the same length; the interpolation report
/// guarantees this for its own output.
pub fn render(samples: &[f64], values: &[f64]) -> String {
    debug_assert_eq!(samples.len(), values.len());

    let mut out = String::new();
    out.push_str("x\tP(x)\n");
    out.push_str("-------------\n");

    for (&xq, &p) in samples.iter().zip(values.iter()) {
        out.push_str(&format!("{xq:.2}\t{:>8}\n", sig3(p)));
    }

    out
}
