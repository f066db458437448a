use thiserror::Error;

use super::types::Inputs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Current age must be between 18 and 90.")]
    CurrentAgeOutOfRange,
    #[error("Retirement age must be greater than current age and <= 100.")]
    RetirementAgeOutOfRange,
    #[error("Savings and contribution cannot be negative.")]
    NegativeSavingsOrContribution,
    #[error("Expected return should be between 0 and 20%.")]
    ExpectedReturnOutOfRange,
    #[error("Inflation should be between 0 and 15%.")]
    InflationOutOfRange,
    #[error("Withdrawal rate should be between 1 and 10%.")]
    WithdrawalRateOutOfRange,
    #[error("Target monthly income cannot be negative.")]
    NegativeTargetIncome,
}

// Rules run in a fixed order and the first violation wins. NaN fails
// whichever rule owns the field.
pub fn validate(inputs: &Inputs) -> Result<(), ValidationError> {
    if !(18.0..=90.0).contains(&inputs.current_age) {
        return Err(ValidationError::CurrentAgeOutOfRange);
    }

    if !inputs.retirement_age.is_finite()
        || inputs.retirement_age <= inputs.current_age
        || inputs.retirement_age > 100.0
    {
        return Err(ValidationError::RetirementAgeOutOfRange);
    }

    if !inputs.current_savings.is_finite()
        || inputs.current_savings < 0.0
        || !inputs.monthly_contribution.is_finite()
        || inputs.monthly_contribution < 0.0
    {
        return Err(ValidationError::NegativeSavingsOrContribution);
    }

    if !(0.0..=20.0).contains(&inputs.expected_return_percent) {
        return Err(ValidationError::ExpectedReturnOutOfRange);
    }

    if !(0.0..=15.0).contains(&inputs.inflation_percent) {
        return Err(ValidationError::InflationOutOfRange);
    }

    if !(1.0..=10.0).contains(&inputs.withdrawal_rate_percent) {
        return Err(ValidationError::WithdrawalRateOutOfRange);
    }

    if !inputs.target_monthly_income.is_finite() || inputs.target_monthly_income < 0.0 {
        return Err(ValidationError::NegativeTargetIncome);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert, prop_assume, proptest};

    fn sample_inputs() -> Inputs {
        Inputs {
            current_age: 30.0,
            retirement_age: 65.0,
            current_savings: 50_000.0,
            monthly_contribution: 500.0,
            expected_return_percent: 6.0,
            inflation_percent: 2.5,
            withdrawal_rate_percent: 4.0,
            target_monthly_income: 4_000.0,
        }
    }

    #[test]
    fn accepts_in_range_inputs() {
        assert_eq!(validate(&sample_inputs()), Ok(()));
    }

    #[test]
    fn accepts_boundary_values() {
        let mut inputs = sample_inputs();
        inputs.current_age = 18.0;
        inputs.retirement_age = 100.0;
        inputs.current_savings = 0.0;
        inputs.monthly_contribution = 0.0;
        inputs.expected_return_percent = 0.0;
        inputs.inflation_percent = 0.0;
        inputs.withdrawal_rate_percent = 1.0;
        inputs.target_monthly_income = 0.0;
        assert_eq!(validate(&inputs), Ok(()));

        inputs.current_age = 90.0;
        inputs.expected_return_percent = 20.0;
        inputs.inflation_percent = 15.0;
        inputs.withdrawal_rate_percent = 10.0;
        assert_eq!(validate(&inputs), Ok(()));
    }

    #[test]
    fn rejects_current_age_out_of_range() {
        let mut inputs = sample_inputs();
        inputs.current_age = 17.9;
        let err = validate(&inputs).expect_err("must reject");
        assert_eq!(err, ValidationError::CurrentAgeOutOfRange);
        assert_eq!(err.to_string(), "Current age must be between 18 and 90.");

        inputs.current_age = 90.1;
        assert_eq!(
            validate(&inputs),
            Err(ValidationError::CurrentAgeOutOfRange)
        );
    }

    #[test]
    fn rejects_retirement_age_not_after_current_age() {
        let mut inputs = sample_inputs();
        inputs.retirement_age = 30.0;
        let err = validate(&inputs).expect_err("must reject");
        assert_eq!(err, ValidationError::RetirementAgeOutOfRange);
        assert_eq!(
            err.to_string(),
            "Retirement age must be greater than current age and <= 100."
        );

        inputs.retirement_age = 100.1;
        assert_eq!(
            validate(&inputs),
            Err(ValidationError::RetirementAgeOutOfRange)
        );
    }

    #[test]
    fn rejects_negative_savings_or_contribution() {
        let mut inputs = sample_inputs();
        inputs.current_savings = -0.01;
        let err = validate(&inputs).expect_err("must reject");
        assert_eq!(err, ValidationError::NegativeSavingsOrContribution);
        assert_eq!(
            err.to_string(),
            "Savings and contribution cannot be negative."
        );

        let mut inputs = sample_inputs();
        inputs.monthly_contribution = -1.0;
        assert_eq!(
            validate(&inputs),
            Err(ValidationError::NegativeSavingsOrContribution)
        );
    }

    #[test]
    fn rejects_percent_rates_out_of_range() {
        let mut inputs = sample_inputs();
        inputs.expected_return_percent = 20.5;
        let err = validate(&inputs).expect_err("must reject");
        assert_eq!(err, ValidationError::ExpectedReturnOutOfRange);
        assert_eq!(err.to_string(), "Expected return should be between 0 and 20%.");

        let mut inputs = sample_inputs();
        inputs.inflation_percent = -0.1;
        let err = validate(&inputs).expect_err("must reject");
        assert_eq!(err, ValidationError::InflationOutOfRange);
        assert_eq!(err.to_string(), "Inflation should be between 0 and 15%.");

        let mut inputs = sample_inputs();
        inputs.withdrawal_rate_percent = 0.9;
        let err = validate(&inputs).expect_err("must reject");
        assert_eq!(err, ValidationError::WithdrawalRateOutOfRange);
        assert_eq!(err.to_string(), "Withdrawal rate should be between 1 and 10%.");

        let mut inputs = sample_inputs();
        inputs.withdrawal_rate_percent = 10.1;
        assert_eq!(
            validate(&inputs),
            Err(ValidationError::WithdrawalRateOutOfRange)
        );
    }

    #[test]
    fn rejects_negative_target_income() {
        let mut inputs = sample_inputs();
        inputs.target_monthly_income = -500.0;
        let err = validate(&inputs).expect_err("must reject");
        assert_eq!(err, ValidationError::NegativeTargetIncome);
        assert_eq!(err.to_string(), "Target monthly income cannot be negative.");
    }

    #[test]
    fn reports_first_violation_in_rule_order() {
        // Both the age and the retirement relation are violated; the age
        // rule is checked first and owns the message.
        let mut inputs = sample_inputs();
        inputs.current_age = 10.0;
        inputs.retirement_age = 50.0;
        assert_eq!(
            validate(&inputs),
            Err(ValidationError::CurrentAgeOutOfRange)
        );

        inputs.retirement_age = 5.0;
        assert_eq!(
            validate(&inputs),
            Err(ValidationError::CurrentAgeOutOfRange)
        );

        let mut inputs = sample_inputs();
        inputs.current_savings = -1.0;
        inputs.withdrawal_rate_percent = 50.0;
        assert_eq!(
            validate(&inputs),
            Err(ValidationError::NegativeSavingsOrContribution)
        );
    }

    #[test]
    fn rejects_nan_with_the_owning_rule_message() {
        let cases: [(fn(&mut Inputs), ValidationError); 8] = [
            (
                |i| i.current_age = f64::NAN,
                ValidationError::CurrentAgeOutOfRange,
            ),
            (
                |i| i.retirement_age = f64::NAN,
                ValidationError::RetirementAgeOutOfRange,
            ),
            (
                |i| i.current_savings = f64::NAN,
                ValidationError::NegativeSavingsOrContribution,
            ),
            (
                |i| i.monthly_contribution = f64::NAN,
                ValidationError::NegativeSavingsOrContribution,
            ),
            (
                |i| i.expected_return_percent = f64::NAN,
                ValidationError::ExpectedReturnOutOfRange,
            ),
            (
                |i| i.inflation_percent = f64::NAN,
                ValidationError::InflationOutOfRange,
            ),
            (
                |i| i.withdrawal_rate_percent = f64::NAN,
                ValidationError::WithdrawalRateOutOfRange,
            ),
            (
                |i| i.target_monthly_income = f64::NAN,
                ValidationError::NegativeTargetIncome,
            ),
        ];

        for (poison, expected) in cases {
            let mut inputs = sample_inputs();
            poison(&mut inputs);
            assert_eq!(validate(&inputs), Err(expected));
        }
    }

    #[test]
    fn rejects_infinite_savings_and_target() {
        let mut inputs = sample_inputs();
        inputs.current_savings = f64::INFINITY;
        assert_eq!(
            validate(&inputs),
            Err(ValidationError::NegativeSavingsOrContribution)
        );

        let mut inputs = sample_inputs();
        inputs.target_monthly_income = f64::INFINITY;
        assert_eq!(validate(&inputs), Err(ValidationError::NegativeTargetIncome));
    }

    #[test]
    fn validation_is_pure() {
        let inputs = sample_inputs();
        assert_eq!(validate(&inputs), validate(&inputs));

        let mut bad = sample_inputs();
        bad.inflation_percent = 16.0;
        assert_eq!(validate(&bad), validate(&bad));
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(48))]

        #[test]
        fn accepts_any_inputs_inside_the_documented_ranges(
            current_age in 18.0f64..=90.0,
            retirement_age in 18.0f64..=100.0,
            current_savings in 0.0f64..=5_000_000.0,
            monthly_contribution in 0.0f64..=50_000.0,
            expected_return_percent in 0.0f64..=20.0,
            inflation_percent in 0.0f64..=15.0,
            withdrawal_rate_percent in 1.0f64..=10.0,
            target_monthly_income in 0.0f64..=100_000.0,
        ) {
            prop_assume!(retirement_age > current_age);
            let inputs = Inputs {
                current_age,
                retirement_age,
                current_savings,
                monthly_contribution,
                expected_return_percent,
                inflation_percent,
                withdrawal_rate_percent,
                target_monthly_income,
            };
            prop_assert!(validate(&inputs).is_ok());
        }
    }
}
