//! Window identifiers and window descriptions.

use std::fmt;
use std::str::FromStr;

use crate::window::error::WindowError;

/// Closed set of supported window families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowKind {
    Bartlett,
    Kaiser,
    Nuttall,
    GeneralGaussian,
    GeneralCosine,
    GeneralHamming,
    Taylor,
    Hamming,
    Hann,
    Tukey,
    Gaussian,
    Exponential,
    Triang,
    Bohman,
    Blackman,
    Cosine,
}

impl WindowKind {
    /// Every family, in registry order.
    pub const ALL: [WindowKind; 16] = [
        Self::Bartlett,
        Self::Kaiser,
        Self::Nuttall,
        Self::GeneralGaussian,
        Self::GeneralCosine,
        Self::GeneralHamming,
        Self::Taylor,
        Self::Hamming,
        Self::Hann,
        Self::Tukey,
        Self::Gaussian,
        Self::Exponential,
        Self::Triang,
        Self::Bohman,
        Self::Blackman,
        Self::Cosine,
    ];

    /// Canonical (case-sensitive) name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bartlett => "bartlett",
            Self::Kaiser => "kaiser",
            Self::Nuttall => "nuttall",
            Self::GeneralGaussian => "general_gaussian",
            Self::GeneralCosine => "general_cosine",
            Self::GeneralHamming => "general_hamming",
            Self::Taylor => "taylor",
            Self::Hamming => "hamming",
            Self::Hann => "hann",
            Self::Tukey => "tukey",
            Self::Gaussian => "gaussian",
            Self::Exponential => "exponential",
            Self::Triang => "triang",
            Self::Bohman => "bohman",
            Self::Blackman => "blackman",
            Self::Cosine => "cosine",
        }
    }

    /// Look up a family by its canonical name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// The parameter a bare-name request is missing, for families that
    /// cannot be requested without a parameter list.
    pub fn required_parameter(self) -> Option<&'static str> {
        match self {
            Self::Gaussian => Some("std"),
            Self::Exponential => Some("tau"),
            Self::Kaiser => Some("beta"),
            _ => None,
        }
    }

    /// Whether the family must be requested with parameters.
    pub fn requires_params(self) -> bool {
        self.required_parameter().is_some()
    }
}

impl fmt::Display for WindowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WindowKind {
    type Err = WindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| WindowError::UnknownWindowType {
            name: s.to_string(),
        })
    }
}

/// A window request: a bare family name, or a name plus positional
/// parameters.
///
/// ```
/// use specwin::WindowSpec;
///
/// let hann = WindowSpec::from("hann");
/// let gauss = WindowSpec::from(("gaussian", 7.0));
/// let taylor: WindowSpec = "taylor, 5, 40".parse().unwrap();
/// assert_eq!(taylor.params(), &[5.0, 40.0]);
/// # let _ = (hann, gauss);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum WindowSpec {
    Bare(String),
    Parameterized(String, Vec<f64>),
}

impl WindowSpec {
    pub fn bare(name: impl Into<String>) -> Self {
        Self::Bare(name.into())
    }

    pub fn with_params(name: impl Into<String>, params: impl IntoIterator<Item = f64>) -> Self {
        Self::Parameterized(name.into(), params.into_iter().collect())
    }

    /// Family name as given by the caller.
    pub fn name(&self) -> &str {
        match self {
            Self::Bare(name) | Self::Parameterized(name, _) => name.as_str(),
        }
    }

    /// Positional parameters; empty for a bare name.
    pub fn params(&self) -> &[f64] {
        match self {
            Self::Bare(_) => &[],
            Self::Parameterized(_, params) => params.as_slice(),
        }
    }
}

impl From<&str> for WindowSpec {
    fn from(name: &str) -> Self {
        Self::bare(name)
    }
}

impl From<WindowKind> for WindowSpec {
    fn from(kind: WindowKind) -> Self {
        Self::bare(kind.name())
    }
}

impl From<(&str, f64)> for WindowSpec {
    fn from((name, param): (&str, f64)) -> Self {
        Self::with_params(name, [param])
    }
}

impl From<(&str, Vec<f64>)> for WindowSpec {
    fn from((name, params): (&str, Vec<f64>)) -> Self {
        Self::Parameterized(name.to_string(), params)
    }
}

impl fmt::Display for WindowSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())?;
        for p in self.params() {
            write!(f, ",{}", p)?;
        }
        Ok(())
    }
}

/// Parses `"name"` as a bare request and `"name,p1,p2,..."` as a
/// parameterized one. Whitespace around fields is ignored.
impl FromStr for WindowSpec {
    type Err = WindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.split(',').map(str::trim);
        let name = match fields.next() {
            Some(name) if !name.is_empty() => name,
            _ => {
                return Err(WindowError::InvalidSpec {
                    text: s.to_string(),
                    reason: "missing window name".to_string(),
                });
            }
        };
        let params = fields
            .map(|field| {
                field.parse::<f64>().map_err(|e| WindowError::InvalidSpec {
                    text: s.to_string(),
                    reason: format!("parameter '{}': {}", field, e),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if params.is_empty() {
            Ok(Self::bare(name))
        } else {
            Ok(Self::with_params(name, params))
        }
    }
}
