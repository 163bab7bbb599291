//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported
//! and accessible via absolute paths.

/// Test that trait module is accessible via absolute path.
#[test]
fn test_traits_module_exports() {
    use pricer_core::traits::priceable::Priceable;
    use pricer_core::traits::Float;
    use pricer_core::types::error::PricingError;

    struct TestInstrument {
        value: f64,
    }

    impl Priceable<f64> for TestInstrument {
        fn price(&self) -> Result<f64, PricingError> {
            Ok(self.value)
        }
    }

    let instrument = TestInstrument { value: 100.0 };
    assert_eq!(instrument.price().unwrap(), 100.0);

    fn generic_sqrt<T: Float>(x: T) -> T {
        x.sqrt()
    }
    assert_eq!(generic_sqrt(9.0_f64), 3.0);
}

/// Test that error types are re-exported at the `types` level.
#[test]
fn test_types_module_exports() {
    use pricer_core::types::PricingError;

    let err = PricingError::InvalidInput("volatility must be positive".to_string());
    assert!(err.to_string().contains("volatility"));
}
