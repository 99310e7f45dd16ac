use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Pipeline area a diagnostic belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticCategory {
    /// Dataset and canvas.
    Context,
    Axis,
    /// Series geometry.
    Path,
    Projection,
    Separator,
}

impl DiagnosticCategory {
    #[must_use]
    pub fn severity(self) -> Severity {
        match self {
            Self::Context | Self::Axis => Severity::Error,
            Self::Path | Self::Projection | Self::Separator => Severity::Warning,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticCode {
    NoData,
    SingleDataPoint,
    InvalidCanvas,
    MissingDataKey,
    NonNumericValue,
    NegativeValue,
    UnmappedValue,
    BarDistribution,
    DegenerateAxis,
    InsufficientTicks,
    DuplicateTicks,
    BreakValueOutOfRange,
    TextMeasurementFailed,
    ProjectionInverted,
    ProjectionOutOfRange,
    SeparatorOutOfRange,
}

impl DiagnosticCode {
    #[must_use]
    pub fn category(self) -> DiagnosticCategory {
        match self {
            Self::NoData | Self::SingleDataPoint | Self::InvalidCanvas => {
                DiagnosticCategory::Context
            }
            Self::MissingDataKey
            | Self::NonNumericValue
            | Self::NegativeValue
            | Self::UnmappedValue
            | Self::BarDistribution => DiagnosticCategory::Path,
            Self::DegenerateAxis
            | Self::InsufficientTicks
            | Self::DuplicateTicks
            | Self::BreakValueOutOfRange
            | Self::TextMeasurementFailed => DiagnosticCategory::Axis,
            Self::ProjectionInverted | Self::ProjectionOutOfRange => {
                DiagnosticCategory::Projection
            }
            Self::SeparatorOutOfRange => DiagnosticCategory::Separator,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    pub code: DiagnosticCode,
    pub message: String,
    /// Series key or axis name the diagnostic refers to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl Diagnostic {
    #[must_use]
    pub fn new(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            category: code.category(),
            code,
            message: message.into(),
            target: None,
        }
    }

    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.category.severity()
    }
}

/// Diagnostics of one layout pass, grouped by category in insertion order.
///
/// The first recorded diagnostic is the primary one.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Diagnostics {
    entries: IndexMap<DiagnosticCategory, Vec<Diagnostic>>,
    primary: Option<Diagnostic>,
}

impl Diagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, diagnostic: Diagnostic) {
        warn!(
            category = ?diagnostic.category,
            code = ?diagnostic.code,
            target = diagnostic.target.as_deref().unwrap_or(""),
            "{}",
            diagnostic.message
        );
        if self.primary.is_none() {
            self.primary = Some(diagnostic.clone());
        }
        self.entries
            .entry(diagnostic.category)
            .or_default()
            .push(diagnostic);
    }

    #[must_use]
    pub fn primary(&self) -> Option<&Diagnostic> {
        self.primary.as_ref()
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.is_clean()
    }

    #[must_use]
    pub fn get(&self, category: DiagnosticCategory) -> &[Diagnostic] {
        self.entries.get(&category).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn contains(&self, code: DiagnosticCode) -> bool {
        self.get(code.category())
            .iter()
            .any(|diagnostic| diagnostic.code == code)
    }

    pub fn categories(&self) -> impl Iterator<Item = DiagnosticCategory> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.values().flatten()
    }
}

/// Receives the diagnostics of every layout pass exactly once.
pub trait DiagnosticSink {
    fn deliver(&mut self, diagnostics: &Diagnostics);
}

impl<F: FnMut(&Diagnostics)> DiagnosticSink for F {
    fn deliver(&mut self, diagnostics: &Diagnostics) {
        self(diagnostics);
    }
}

impl DiagnosticSink for Vec<Diagnostics> {
    fn deliver(&mut self, diagnostics: &Diagnostics) {
        self.push(diagnostics.clone());
    }
}
