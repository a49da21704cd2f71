use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::ir::{Operator, Unit, Variable};

/// Raw and deduplicated operator/operand counts for one unit.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpCounts {
    /// Total number of operators, with repetition.
    pub total_operators: usize,
    /// Number of distinct operator kinds.
    pub unique_operators: usize,
    /// Total number of operands, with repetition.
    pub total_operands: usize,
    /// Number of distinct referenced variables.
    pub unique_operands: usize,
}

/// Accumulates one unit's operator/operand occurrences.
///
/// Uniqueness is set cardinality: operator kinds by tag equality,
/// operands by variable identity (declaration-site id), so two
/// references to the same variable from different call sites count once.
struct UnitCollector<'a> {
    operator_kinds: FxHashSet<Operator>,
    operand_refs: FxHashSet<&'a Variable>,
    total_operators: usize,
    total_operands: usize,
}

impl<'a> UnitCollector<'a> {
    fn new() -> Self {
        Self {
            operator_kinds: FxHashSet::default(),
            operand_refs: FxHashSet::default(),
            total_operators: 0,
            total_operands: 0,
        }
    }

    fn add_operator(&mut self, operator: Operator) {
        self.operator_kinds.insert(operator);
        self.total_operators += 1;
    }

    fn add_operand(&mut self, var: &'a Variable) {
        self.operand_refs.insert(var);
        self.total_operands += 1;
    }

    fn finish(self) -> OpCounts {
        OpCounts {
            total_operators: self.total_operators,
            unique_operators: self.operator_kinds.len(),
            total_operands: self.total_operands,
            unique_operands: self.operand_refs.len(),
        }
    }
}

/// Walks one unit in Function → Node → Operation order and counts every
/// operator occurrence and every non-temporary used operand.
///
/// A unit with no functions or no operations yields all-zero counts;
/// the traversal is read-only and cannot fail.
pub(super) fn count_unit(unit: &Unit) -> OpCounts {
    let mut collector = UnitCollector::new();
    for function in &unit.functions {
        for node in &function.nodes {
            for operation in &node.operations {
                collector.add_operator(operation.operator);
                for operand in &operation.used {
                    // Temporaries are lowering artifacts, not source
                    // operands.
                    if let Some(var) = operand.as_variable() {
                        collector.add_operand(var);
                    }
                }
            }
        }
    }
    collector.finish()
}
