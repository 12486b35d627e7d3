use seedbrush::to_decimal_string;

const VALUES: [u128; 6] = [1, 10, 100, 1234, 987654321, 9876543210];

/// Independent oracle: build the fixed-point rendering from the digit
/// string instead of division, so both paths must agree.
fn fixed_point(value: u128, decimals: usize, negative: bool) -> String {
    let padded = format!("{value:0>width$}", width = decimals + 1);
    let split = padded.len() - decimals;
    let mut expect = String::new();
    if negative {
        expect.push('-');
    }
    expect.push_str(&padded[..split]);
    if decimals > 0 {
        expect.push('.');
        expect.push_str(&padded[split..]);
    }
    expect
}

#[test]
fn formats_positive_values_across_decimals() {
    for decimals in 0u32..18 {
        for value in VALUES {
            assert_eq!(
                to_decimal_string(value, decimals, false),
                fixed_point(value, decimals as usize, false),
                "value={value} decimals={decimals}"
            );
        }
    }
}

#[test]
fn formats_negative_values_across_decimals() {
    for decimals in 0u32..18 {
        for value in VALUES {
            assert_eq!(
                to_decimal_string(value, decimals, true),
                fixed_point(value, decimals as usize, true),
                "value={value} decimals={decimals}"
            );
        }
    }
}

#[test]
fn formats_zero_across_decimals() {
    for decimals in 0u32..18 {
        assert_eq!(
            to_decimal_string(0, decimals, false),
            fixed_point(0, decimals as usize, false),
            "decimals={decimals}"
        );
    }
}

#[test]
fn renders_literal_vectors() {
    assert_eq!(to_decimal_string(9876543210, 4, false), "987654.3210");
    assert_eq!(to_decimal_string(987654321, 9, true), "-0.987654321");
    assert_eq!(to_decimal_string(1, 17, false), "0.00000000000000001");
    assert_eq!(to_decimal_string(10, 1, false), "1.0");
    assert_eq!(to_decimal_string(100, 2, false), "1.00");
    assert_eq!(to_decimal_string(1234, 0, true), "-1234");
}
