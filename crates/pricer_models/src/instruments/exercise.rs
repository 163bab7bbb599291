//! Option exercise style definitions.

/// Option exercise style.
///
/// Defines when an option can be exercised during its lifetime.
///
/// # Variants
/// - `European`: Exercise only at expiry
/// - `American`: Exercise at any lattice node before or at expiry
///
/// # Examples
/// ```
/// use pricer_models::instruments::ExerciseStyle;
///
/// assert_eq!(ExerciseStyle::from_is_european(true), ExerciseStyle::European);
/// assert!(ExerciseStyle::American.allows_early_exercise());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ExerciseStyle {
    /// European style: exercise only at expiry.
    #[default]
    European,

    /// American style: exercise at any time before expiry.
    American,
}

impl ExerciseStyle {
    /// Maps the boolean flag used by the flat pricing entry point.
    #[inline]
    pub fn from_is_european(is_european: bool) -> Self {
        if is_european {
            ExerciseStyle::European
        } else {
            ExerciseStyle::American
        }
    }

    /// Returns whether this is a European exercise style.
    #[inline]
    pub fn is_european(&self) -> bool {
        matches!(self, ExerciseStyle::European)
    }

    /// Returns whether this is an American exercise style.
    #[inline]
    pub fn is_american(&self) -> bool {
        matches!(self, ExerciseStyle::American)
    }

    /// Returns whether intermediate nodes compare against immediate exercise.
    #[inline]
    pub fn allows_early_exercise(&self) -> bool {
        self.is_american()
    }

    /// Short human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            ExerciseStyle::European => "European",
            ExerciseStyle::American => "American",
        }
    }
}
