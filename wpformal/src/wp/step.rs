//! Derivation steps: one entry per inference the WP algorithm performs.
use crate::expr::Expression;
use crate::expr::definiteness::DefinitenessCondition;
use crate::locale::Locale;

/// What a derivation step records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepKind {
    /// The assignment about to be transformed.
    Assignment { target: String, value: String },
    /// The substitution the assignment rule applies.
    Replacing { target: String, value: String },
    /// The predicate obtained after a substitution.
    Obtained(Expression),
    /// A side-condition found on the obtained predicate.
    Definiteness(DefinitenessCondition),
    SequenceHeader,
    SequenceSummary(Expression),
    EmptySequence,
    Branching { condition: String },
    EmptyBranch,
    /// Boundary between two statements of the same branch.
    Separator,
    /// The combined predicate of both branches.
    Merge(Expression),
}

impl StepKind {
    /// Text of this step in the given locale, without indentation.
    pub fn render(&self, locale: Locale) -> String {
        use StepKind::*;

        match locale {
            Locale::English => match self {
                Assignment { target, value } => format!("assignment {target} := {value}"),
                Replacing { target, value } => format!("replacing {target} with {value}"),
                Obtained(e) => format!("obtained: {e}"),
                Definiteness(c) => {
                    format!("adding definiteness condition: {}", c.describe(locale))
                }
                SequenceHeader => "sequence of statements".to_string(),
                SequenceSummary(e) => format!("sequence result: {e}"),
                EmptySequence => "empty sequence - condition unchanged".to_string(),
                Branching { condition } => format!("branching on {condition}"),
                EmptyBranch => "empty branch - condition unchanged".to_string(),
                Separator => "---".to_string(),
                Merge(e) => format!("merging branches: {e}"),
            },
            Locale::Russian => match self {
                Assignment { target, value } => format!("Присваивание {target} := {value}"),
                Replacing { target, value } => format!("Заменяем {target} на {value} в условии"),
                Obtained(e) => format!("Получаем: {e}"),
                Definiteness(c) => {
                    format!("Добавляем условие определенности: {}", c.describe(locale))
                }
                SequenceHeader => "Последовательность операторов".to_string(),
                SequenceSummary(e) => format!("Итог последовательности: {e}"),
                EmptySequence => "Пустая последовательность - условие не меняется".to_string(),
                Branching { condition } => format!("Ветвление if ({condition})"),
                EmptyBranch => "Пустая ветка - условие не меняется".to_string(),
                Separator => "---".to_string(),
                Merge(e) => format!("Объединяем ветки: {e}"),
            },
        }
    }
}

/// A single entry of the derivation log.
///
/// `depth` is the nesting level of the statement that produced the step; the rendered text
/// is indented by two spaces per level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivationStep {
    pub depth: usize,
    pub kind: StepKind,
}

impl DerivationStep {
    pub const INDENT: &'static str = "  ";

    #[inline]
    pub fn new(depth: usize, kind: StepKind) -> Self {
        Self { depth, kind }
    }

    /// Indented text of this step in the given locale.
    pub fn render(&self, locale: Locale) -> String {
        let mut out = Self::INDENT.repeat(self.depth);
        out.push_str(&self.kind.render(locale));
        out
    }
}

impl std::fmt::Display for DerivationStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(Locale::English))
    }
}
