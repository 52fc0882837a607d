//! Caller-composed multi-operation units.

use crate::{Operation, OperationResult};

/// Runs several operations as one undoable unit.
///
/// The engine has no built-in multi-operation transactions; composing
/// operations is the caller's job, and this type is how. Execution is
/// all-or-nothing: when a step fails, the steps already executed are
/// undone in reverse before the failure is reported.
pub struct CompositeOperation {
    label: String,
    steps: Vec<Box<dyn Operation>>,
}

impl CompositeOperation {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            steps: Vec::new(),
        }
    }

    pub fn step(mut self, operation: impl Operation + 'static) -> Self {
        self.steps.push(Box::new(operation));
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl Operation for CompositeOperation {
    fn name(&self) -> &str {
        &self.label
    }

    fn validate(&self) -> Option<String> {
        self.steps.iter().find_map(|step| step.validate())
    }

    fn execute(&mut self) -> OperationResult {
        for (index, step) in self.steps.iter_mut().enumerate() {
            let result = step.execute();
            if !result.success {
                // Roll back what already ran, newest first. A step whose
                // undo also fails leaves the tree partially applied, so
                // that failure is reported alongside the original one.
                let mut stuck = Vec::new();
                for (done_index, done) in self.steps[..index].iter_mut().enumerate().rev() {
                    let undone = done.undo();
                    if !undone.success {
                        stuck.push(format!("step {}: {}", done_index + 1, undone.message));
                    }
                }
                let mut message = format!(
                    "step {} of '{}' failed: {}",
                    index + 1,
                    self.label,
                    result.message
                );
                if !stuck.is_empty() {
                    message.push_str(&format!("; rollback incomplete ({})", stuck.join("; ")));
                }
                return OperationResult::fail(message);
            }
        }
        OperationResult::ok(format!(
            "'{}' applied {} steps",
            self.label,
            self.steps.len()
        ))
    }

    fn undo(&mut self) -> OperationResult {
        for (index, step) in self.steps.iter_mut().enumerate().rev() {
            let result = step.undo();
            if !result.success {
                return OperationResult::fail(format!(
                    "undo of step {} in '{}' failed: {}",
                    index + 1,
                    self.label,
                    result.message
                ));
            }
        }
        OperationResult::ok(format!("'{}' undone", self.label))
    }

    fn redo(&mut self) -> OperationResult {
        for (index, step) in self.steps.iter_mut().enumerate() {
            let result = step.redo();
            if !result.success {
                return OperationResult::fail(format!(
                    "redo of step {} in '{}' failed: {}",
                    index + 1,
                    self.label,
                    result.message
                ));
            }
        }
        OperationResult::ok(format!("'{}' reapplied", self.label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{AddEntity, AddEntityParams};
    use arbor_model::domain;

    #[test]
    fn test_composite_undoes_in_reverse() {
        let model = domain::model("Shop");
        let mut composite = CompositeOperation::new("seed model")
            .step(AddEntity::new(
                &model,
                AddEntityParams {
                    container: model.id(),
                    name: "Customer".to_string(),
                },
            ))
            .step(AddEntity::new(
                &model,
                AddEntityParams {
                    container: model.id(),
                    name: "Order".to_string(),
                },
            ));

        assert!(composite.execute().success);
        assert_eq!(domain::entities(&model).len(), 2);

        assert!(composite.undo().success);
        assert_eq!(domain::entities(&model).len(), 0);

        assert!(composite.redo().success);
        assert_eq!(domain::entities(&model).len(), 2);
    }

    struct BrittleUndo;

    impl Operation for BrittleUndo {
        fn name(&self) -> &str {
            "brittle undo"
        }

        fn validate(&self) -> Option<String> {
            None
        }

        fn execute(&mut self) -> OperationResult {
            OperationResult::ok("applied")
        }

        fn undo(&mut self) -> OperationResult {
            OperationResult::fail("retained node is gone")
        }

        fn redo(&mut self) -> OperationResult {
            OperationResult::ok("reapplied")
        }
    }

    #[test]
    fn test_rollback_failure_is_reported() {
        let model = domain::model("Shop");
        model.add_child(&domain::entity("Order"));

        let mut composite = CompositeOperation::new("seed model")
            .step(BrittleUndo)
            // Fails: "Order" already exists, forcing a rollback of step 1.
            .step(AddEntity::new(
                &model,
                AddEntityParams {
                    container: model.id(),
                    name: "Order".to_string(),
                },
            ));

        let result = composite.execute();
        assert!(!result.success);
        assert!(result.message.contains("step 2"));
        assert!(result.message.contains("rollback incomplete"));
        assert!(result.message.contains("retained node is gone"));
    }

    #[test]
    fn test_failed_step_rolls_back_earlier_steps() {
        let model = domain::model("Shop");
        model.add_child(&domain::entity("Order"));

        let mut composite = CompositeOperation::new("seed model")
            .step(AddEntity::new(
                &model,
                AddEntityParams {
                    container: model.id(),
                    name: "Customer".to_string(),
                },
            ))
            // Fails: "Order" already exists.
            .step(AddEntity::new(
                &model,
                AddEntityParams {
                    container: model.id(),
                    name: "Order".to_string(),
                },
            ));

        let result = composite.execute();
        assert!(!result.success);
        assert!(result.message.contains("step 2"));

        let names: Vec<String> = domain::entities(&model)
            .iter()
            .map(|entity| entity.get::<String>(domain::NAME).unwrap())
            .collect();
        assert_eq!(names, ["Order"]);
    }
}
