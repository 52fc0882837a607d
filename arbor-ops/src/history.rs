//! Undo/redo history.

use crate::{Operation, OperationResult};

/// A linear undo/redo stack of executed operations.
///
/// Performing a new operation clears the redo stack; operations whose
/// execution fails are not recorded. When an undo or redo reports a
/// conflict the operation stays on its stack so the caller can inspect
/// the history instead of silently losing it.
#[derive(Default)]
pub struct OperationHistory {
    done: Vec<Box<dyn Operation>>,
    undone: Vec<Box<dyn Operation>>,
}

impl OperationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute `operation` and record it on success.
    pub fn perform(&mut self, mut operation: Box<dyn Operation>) -> OperationResult {
        let result = operation.execute();
        if result.success {
            self.done.push(operation);
            self.undone.clear();
        }
        result
    }

    /// Undo the most recent operation.
    pub fn undo(&mut self) -> OperationResult {
        let Some(mut operation) = self.done.pop() else {
            return OperationResult::fail("nothing to undo");
        };
        let result = operation.undo();
        if result.success {
            self.undone.push(operation);
        } else {
            self.done.push(operation);
        }
        result
    }

    /// Redo the most recently undone operation.
    pub fn redo(&mut self) -> OperationResult {
        let Some(mut operation) = self.undone.pop() else {
            return OperationResult::fail("nothing to redo");
        };
        let result = operation.redo();
        if result.success {
            self.done.push(operation);
        } else {
            self.undone.push(operation);
        }
        result
    }

    pub fn can_undo(&self) -> bool {
        !self.done.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    /// Names of executed operations, oldest first.
    pub fn entries(&self) -> Vec<&str> {
        self.done.iter().map(|op| op.name()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{AddEntity, AddEntityParams, PropertySpec};
    use arbor_model::domain;

    fn add_entity(model: &arbor_model::ArtifactNode, name: &str) -> Box<dyn Operation> {
        Box::new(AddEntity::new(
            model,
            AddEntityParams {
                container: model.id(),
                name: name.to_string(),
            },
        ))
    }

    #[test]
    fn test_perform_undo_redo() {
        let model = domain::model("Shop");
        let mut history = OperationHistory::new();

        assert!(history.perform(add_entity(&model, "Customer")).success);
        assert!(history.can_undo());
        assert!(!history.can_redo());

        assert!(history.undo().success);
        assert_eq!(domain::entities(&model).len(), 0);
        assert!(history.can_redo());

        assert!(history.redo().success);
        assert_eq!(domain::entities(&model).len(), 1);
    }

    #[test]
    fn test_new_operation_clears_redo() {
        let model = domain::model("Shop");
        let mut history = OperationHistory::new();

        history.perform(add_entity(&model, "Customer"));
        history.undo();
        history.perform(add_entity(&model, "Order"));

        assert!(!history.can_redo());
        assert_eq!(history.entries(), ["add entity"]);
    }

    #[test]
    fn test_failed_execution_is_not_recorded() {
        let model = domain::model("Shop");
        let mut history = OperationHistory::new();

        assert!(!history.perform(add_entity(&model, "")).success);
        assert!(!history.can_undo());
    }

    #[test]
    fn test_customer_scenario() {
        // Adding "Customer" with one non-nullable "Name" property creates
        // exactly one entity, one default state, and one property node;
        // undo removes all three, redo restores the same identifiers.
        let model = domain::model("Shop");
        let mut history = OperationHistory::new();

        let op = crate::ops::AddEntityWithProperties::new(
            &model,
            AddEntityParams {
                container: model.id(),
                name: "Customer".to_string(),
            },
            vec![PropertySpec::new("Name", "VarChar").not_nullable()],
        );
        assert!(history.perform(Box::new(op)).success);

        let entity = &domain::entities(&model)[0];
        let entity_id = entity.id();
        let state_id = entity.children()[0].id();
        let property_id = entity.children()[1].id();
        assert_eq!(entity.child_count(), 2);

        assert!(history.undo().success);
        assert_eq!(model.child_count(), 0);

        assert!(history.redo().success);
        let entity = &domain::entities(&model)[0];
        assert_eq!(entity.id(), entity_id);
        assert_eq!(entity.children()[0].id(), state_id);
        assert_eq!(entity.children()[1].id(), property_id);
    }
}
