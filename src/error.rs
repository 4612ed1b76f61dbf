use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveError {
    /// A binomial coefficient of this degree does not fit into a `u64`.
    DegreeTooLarge { degree: usize },
}

impl fmt::Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveError::DegreeTooLarge { degree } => write!(
                f,
                "curve of degree {} has binomial coefficients that overflow u64",
                degree
            ),
        }
    }
}

impl core::error::Error for CurveError {}
