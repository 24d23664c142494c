//! Orchestration services for the workflow context.

mod coordinator;

pub use coordinator::{
    BoardWorkflowService, CreateBoardRequest, CreateTaskRequest, EditTaskRequest,
    MoveTaskRequest, WorkflowError, WorkflowResult,
};
