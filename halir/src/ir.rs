//! Lowered-IR data model consumed by the metrics pipeline.
//!
//! The graph is built by an external analysis front-end and handed over
//! fully formed: `Unit` → `Function` → `Node` → `Operation`. The types
//! here never mutate it; they only define the shape and the identity
//! semantics the extractor relies on. Every type is serde-enabled so a
//! graph can also be supplied as JSON to the `halir` binary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of operator kinds a lowered IR instruction can carry.
///
/// Operator identity is the tag itself: two `Addition` operations are the
/// same operator no matter where they occur. The set mirrors the
/// expression kinds of a typical contract IR and is deliberately small
/// and comparable by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// Plain assignment (`=`).
    Assignment,
    /// Arithmetic addition.
    Addition,
    /// Arithmetic subtraction.
    Subtraction,
    /// Arithmetic multiplication.
    Multiplication,
    /// Arithmetic division.
    Division,
    /// Arithmetic remainder.
    Modulo,
    /// Exponentiation.
    Power,
    /// Equality comparison (`==`).
    Equality,
    /// Inequality comparison (`!=`).
    NotEqual,
    /// Less-than comparison.
    Less,
    /// Less-than-or-equal comparison.
    LessEqual,
    /// Greater-than comparison.
    Greater,
    /// Greater-than-or-equal comparison.
    GreaterEqual,
    /// Short-circuit conjunction.
    LogicalAnd,
    /// Short-circuit disjunction.
    LogicalOr,
    /// Logical negation.
    LogicalNot,
    /// Bitwise conjunction.
    BitwiseAnd,
    /// Bitwise disjunction.
    BitwiseOr,
    /// Bitwise exclusive-or.
    BitwiseXor,
    /// Bitwise complement.
    BitwiseNot,
    /// Left shift.
    ShiftLeft,
    /// Right shift.
    ShiftRight,
    /// Internal or external call.
    Call,
    /// Return from a function.
    Return,
    /// Conditional branch.
    Branch,
    /// Array or mapping index access.
    Index,
    /// Member (field) access.
    Member,
    /// Explicit type conversion.
    TypeConversion,
    /// Unary arithmetic negation.
    Negation,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Assignment => "assignment",
            Self::Addition => "addition",
            Self::Subtraction => "subtraction",
            Self::Multiplication => "multiplication",
            Self::Division => "division",
            Self::Modulo => "modulo",
            Self::Power => "power",
            Self::Equality => "equality",
            Self::NotEqual => "not_equal",
            Self::Less => "less",
            Self::LessEqual => "less_equal",
            Self::Greater => "greater",
            Self::GreaterEqual => "greater_equal",
            Self::LogicalAnd => "logical_and",
            Self::LogicalOr => "logical_or",
            Self::LogicalNot => "logical_not",
            Self::BitwiseAnd => "bitwise_and",
            Self::BitwiseOr => "bitwise_or",
            Self::BitwiseXor => "bitwise_xor",
            Self::BitwiseNot => "bitwise_not",
            Self::ShiftLeft => "shift_left",
            Self::ShiftRight => "shift_right",
            Self::Call => "call",
            Self::Return => "return",
            Self::Branch => "branch",
            Self::Index => "index",
            Self::Member => "member",
            Self::TypeConversion => "type_conversion",
            Self::Negation => "negation",
        };
        f.write_str(name)
    }
}

/// A reference to a source-level variable.
///
/// `id` is the stable identity key assigned by the front-end at the
/// variable's declaration site (e.g. its storage slot). Every reference
/// to the same logical variable carries the same `id`, so equality and
/// hashing are defined over `id` alone; `name` is display-only and may
/// differ in qualification between call sites.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variable {
    /// Declaration-site identity key.
    pub id: u64,
    /// Human-readable name, for reports and diagnostics.
    pub name: String,
}

impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Variable {}

impl std::hash::Hash for Variable {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// A value read by an operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operand {
    /// A source-level variable reference.
    Variable(Variable),
    /// A compiler-introduced intermediate, identified by its slot in the
    /// lowering. Never a source-level variable; excluded from counting.
    Temporary(u64),
}

impl Operand {
    /// Returns the referenced variable, or `None` for a temporary.
    pub fn as_variable(&self) -> Option<&Variable> {
        match self {
            Self::Variable(var) => Some(var),
            Self::Temporary(_) => None,
        }
    }
}

/// A single lowered IR instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// The instruction's operator kind.
    pub operator: Operator,
    /// The values the instruction reads, in operand order.
    pub used: Vec<Operand>,
}

impl Operation {
    /// Builds an operation from its operator kind and used values.
    pub fn new(operator: Operator, used: Vec<Operand>) -> Self {
        Self { operator, used }
    }
}

/// A basic analysis step holding an ordered run of operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Lowered instructions in program order.
    pub operations: Vec<Operation>,
}

/// A function of a unit, as an ordered sequence of nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Function {
    /// Function name, for diagnostics only.
    pub name: String,
    /// Basic analysis steps in control-flow order.
    pub nodes: Vec<Node>,
}

/// A named program unit (a contract-like component).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// Unit name; the first column of every report row.
    pub name: String,
    /// Functions in declaration order.
    pub functions: Vec<Function>,
}
