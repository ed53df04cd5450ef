//! Expression handlers: access, assignment, literals, operators, conditionals.

use cry_ir::{BinaryOp, ComparisonOp, Node, NodeKind, Property};

use super::Interpreter;
use crate::environment::Environment;
use crate::errors::{
    invalid_assignment_target, non_boolean_condition, not_an_object, undefined_property, EvalResult,
};
use crate::operators::{evaluate_binary, evaluate_comparison};
use crate::value::Value;

impl Interpreter {
    /// `object.property`
    pub(super) fn eval_member(
        &mut self,
        object: &Node,
        property: &str,
        env: &Environment,
    ) -> EvalResult {
        match self.evaluate(object, env)? {
            Value::Object(obj) => obj
                .get(property)
                .cloned()
                .ok_or_else(|| undefined_property(property)),
            other => Err(not_an_object(other.type_name())),
        }
    }

    /// `name = value`. Only bare identifiers are assignable; the target is
    /// checked before the right-hand side runs.
    pub(super) fn eval_assignment(
        &mut self,
        assignee: &Node,
        value: &Node,
        env: &Environment,
    ) -> EvalResult {
        let NodeKind::Identifier { symbol } = &assignee.kind else {
            return Err(invalid_assignment_target(assignee.kind_name()).or_span(assignee.span));
        };
        let value = self.evaluate(value, env)?;
        env.assign_var(symbol, value)
    }

    /// `{ a: expr, b }`. Shorthand entries read the same-named variable.
    pub(super) fn eval_object(&mut self, properties: &[Property], env: &Environment) -> EvalResult {
        let mut entries = Vec::with_capacity(properties.len());
        for property in properties {
            let value = match &property.value {
                Some(expr) => self.evaluate(expr, env)?,
                None => env.lookup_var(&property.key)?,
            };
            entries.push((property.key.clone(), value));
        }
        Ok(Value::object(entries))
    }

    /// Arithmetic. Left operand first.
    pub(super) fn eval_binary(
        &mut self,
        left: &Node,
        op: BinaryOp,
        right: &Node,
        env: &Environment,
    ) -> EvalResult {
        let lhs = self.evaluate(left, env)?;
        let rhs = self.evaluate(right, env)?;
        evaluate_binary(&lhs, &rhs, op, &self.policy)
    }

    /// `==` / `!=`. Left operand first.
    pub(super) fn eval_comparison(
        &mut self,
        left: &Node,
        op: ComparisonOp,
        right: &Node,
        env: &Environment,
    ) -> EvalResult {
        let lhs = self.evaluate(left, env)?;
        let rhs = self.evaluate(right, env)?;
        evaluate_comparison(&lhs, &rhs, op)
    }

    /// Conditional expression.
    ///
    /// Branches run in the current environment (no new scope). The result is
    /// the taken branch's last value; an empty branch, or a false condition
    /// with no `otherwise`, yields `null`.
    pub(super) fn eval_if(
        &mut self,
        condition: &Node,
        then: &[Node],
        otherwise: Option<&[Node]>,
        env: &Environment,
    ) -> EvalResult {
        let taken = match self.evaluate(condition, env)? {
            Value::Bool(true) => then,
            Value::Bool(false) => match otherwise {
                Some(branch) => branch,
                None => return Ok(Value::Null),
            },
            other => {
                return Err(non_boolean_condition(other.type_name()).or_span(condition.span));
            }
        };
        self.eval_block(taken, env)
    }
}
