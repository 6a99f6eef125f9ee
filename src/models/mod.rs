pub mod bs;

/// Common traits used by pricing models
pub mod traits {
    use crate::error::DomainError;
    use crate::params::OptionParameters;

    /// A model that maps one parameter set to one option price.
    ///
    /// The sensitivity sweeper is generic over this trait so that it can be
    /// driven by any closed-form or numerical pricer.
    pub trait OptionPricer {
        fn price(&self, params: &OptionParameters) -> Result<f64, DomainError>;
    }

    impl<F> OptionPricer for F
    where
        F: Fn(&OptionParameters) -> Result<f64, DomainError>,
    {
        fn price(&self, params: &OptionParameters) -> Result<f64, DomainError> {
            self(params)
        }
    }
}
