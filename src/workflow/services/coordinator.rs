//! Move coordinator: the sole writer spanning the task and board stores.

use crate::board::{
    domain::{Board, BoardDomainError, BoardId, BoardName, ColumnId, WorkspaceId},
    ports::{BoardRepository, BoardRepositoryError},
};
use crate::task::{
    domain::{
        NewTaskData, Task, TaskDomainError, TaskId, TaskPatch, TaskStatus, Title, UserId,
        derive_status,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use crate::workflow::ports::{MembershipGate, MembershipGateError};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBoardRequest {
    caller: UserId,
    workspace: WorkspaceId,
    name: String,
}

impl CreateBoardRequest {
    /// Creates a board-creation request.
    #[must_use]
    pub fn new(caller: UserId, workspace: WorkspaceId, name: impl Into<String>) -> Self {
        Self {
            caller,
            workspace,
            name: name.into(),
        }
    }
}

/// Request payload for creating a task in a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    caller: UserId,
    workspace: WorkspaceId,
    board: BoardId,
    column: ColumnId,
    title: String,
    description: Option<String>,
    assignee: Option<UserId>,
}

impl CreateTaskRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(
        caller: UserId,
        workspace: WorkspaceId,
        board: BoardId,
        column: ColumnId,
        title: impl Into<String>,
    ) -> Self {
        Self {
            caller,
            workspace,
            board,
            column,
            title: title.into(),
            description: None,
            assignee: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the task assignee.
    #[must_use]
    pub const fn with_assignee(mut self, assignee: UserId) -> Self {
        self.assignee = Some(assignee);
        self
    }
}

/// Request payload for relocating a task between columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveTaskRequest {
    caller: UserId,
    task: TaskId,
    source: ColumnId,
    destination: ColumnId,
    index: usize,
}

impl MoveTaskRequest {
    /// Creates a move request.
    #[must_use]
    pub const fn new(
        caller: UserId,
        task: TaskId,
        source: ColumnId,
        destination: ColumnId,
        index: usize,
    ) -> Self {
        Self {
            caller,
            task,
            source,
            destination,
            index,
        }
    }
}

/// Request payload for editing a task's scalar fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTaskRequest {
    caller: UserId,
    task: TaskId,
    title: Option<String>,
    description: Option<String>,
}

impl EditTaskRequest {
    /// Creates an empty edit request for the task.
    #[must_use]
    pub const fn new(caller: UserId, task: TaskId) -> Self {
        Self {
            caller,
            task,
            title: None,
            description: None,
        }
    }

    /// Sets the replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Service-level errors for workflow operations.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// Task field validation failed.
    #[error(transparent)]
    TaskValidation(#[from] TaskDomainError),

    /// Board field validation failed.
    #[error(transparent)]
    BoardValidation(#[from] BoardDomainError),

    /// The referenced task does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// The referenced board does not exist.
    #[error("board not found: {0}")]
    BoardNotFound(BoardId),

    /// The referenced column does not exist on the task's board.
    #[error("column not found on board: {0}")]
    ColumnNotFound(ColumnId),

    /// The request's workspace does not own the board.
    #[error("board {board} is not owned by workspace {workspace}")]
    WorkspaceMismatch {
        /// Board named by the request.
        board: BoardId,
        /// Workspace named by the request.
        workspace: WorkspaceId,
    },

    /// The task is not currently in the source column named by the request.
    #[error("task {task} is not in column {column}")]
    SourceColumnMismatch {
        /// Task named by the request.
        task: TaskId,
        /// Source column named by the request.
        column: ColumnId,
    },

    /// The caller is not a member of the owning workspace.
    #[error("user {user} is not a member of workspace {workspace}")]
    Forbidden {
        /// Authenticated caller.
        user: UserId,
        /// Workspace owning the board.
        workspace: WorkspaceId,
    },

    /// The membership collaborator failed.
    #[error(transparent)]
    Membership(#[from] MembershipGateError),

    /// Task store failure before any board mutation; nothing moved.
    #[error(transparent)]
    TaskRepository(#[from] TaskRepositoryError),

    /// Board store failure before the task record changed; nothing moved.
    #[error(transparent)]
    BoardRepository(#[from] BoardRepositoryError),

    /// The task record was updated but the board lists were not.
    ///
    /// The system is transiently inconsistent: the task's column field
    /// points at the destination while no column list carries its id.
    /// Callers should surface the error and re-fetch rather than retry
    /// blindly.
    #[error("move partially applied for task {task}: board lists were not updated")]
    PartialApply {
        /// Task whose record already reflects the destination.
        task: TaskId,
        /// Underlying board-side failure.
        #[source]
        source: Arc<dyn std::error::Error + Send + Sync>,
    },
}

impl WorkflowError {
    fn partial_apply(
        task: TaskId,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::PartialApply {
            task,
            source: Arc::new(err),
        }
    }
}

/// Result type for workflow service operations.
pub type WorkflowResult<T> = Result<T, WorkflowError>;

/// Resolved plan for one move, computed before anything is mutated.
#[derive(Debug, Clone, Copy)]
struct MovePlan {
    destination: ColumnId,
    derived: Option<TaskStatus>,
    /// Move is already satisfied; skip every write.
    already_consistent: bool,
}

/// Move coordinator and operation surface for one deployment.
///
/// The sole component permitted to mutate a task's column membership: every
/// operation that touches both the task store and the board's column lists
/// goes through here, always persisting the task record before the board so
/// a failure can never leave a moved list pointing at an unmoved task.
#[derive(Clone)]
pub struct BoardWorkflowService<T, B, M, C>
where
    T: TaskRepository,
    B: BoardRepository,
    M: MembershipGate,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    boards: Arc<B>,
    membership: Arc<M>,
    clock: Arc<C>,
}

impl<T, B, M, C> BoardWorkflowService<T, B, M, C>
where
    T: TaskRepository,
    B: BoardRepository,
    M: MembershipGate,
    C: Clock + Send + Sync,
{
    /// Creates a new workflow service.
    #[must_use]
    pub const fn new(tasks: Arc<T>, boards: Arc<B>, membership: Arc<M>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            boards,
            membership,
            clock,
        }
    }

    /// Creates a board with the three canonical empty columns.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError`] when the name is invalid, the caller is not
    /// a workspace member, or persistence fails.
    pub async fn create_board(&self, request: CreateBoardRequest) -> WorkflowResult<Board> {
        let name = BoardName::new(request.name)?;
        self.require_member(request.caller, request.workspace).await?;
        let board = Board::new(request.workspace, name, &*self.clock);
        self.boards.store(&board).await?;
        Ok(board)
    }

    /// Creates a task at the head of the given column.
    ///
    /// The initial status is derived from the column's display name; a name
    /// matching nothing yields `todo`, since a brand-new task has no prior
    /// status to retain.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError`] when validation, authorization, lookup, or
    /// persistence fails. A [`WorkflowError::PartialApply`] means the task
    /// record exists but the column list was not updated.
    pub async fn create_task(&self, request: CreateTaskRequest) -> WorkflowResult<Task> {
        let title = Title::new(request.title)?;
        self.require_member(request.caller, request.workspace).await?;

        let mut board = self.load_board(request.board).await?;
        if board.workspace() != request.workspace {
            return Err(WorkflowError::WorkspaceMismatch {
                board: request.board,
                workspace: request.workspace,
            });
        }
        let column = board
            .column(request.column)
            .ok_or(WorkflowError::ColumnNotFound(request.column))?;
        let initial_status = derive_status(column.name().as_str()).unwrap_or(TaskStatus::Todo);

        let task = Task::new(
            NewTaskData {
                title,
                description: request.description,
                assignee: request.assignee,
                workspace: board.workspace(),
                board: board.id(),
                column: request.column,
                initial_status,
            },
            &*self.clock,
        );
        self.tasks.store(&task).await?;

        Self::list_insert(&mut board, request.column, task.id(), 0)?;
        self.boards
            .update(&board)
            .await
            .map_err(|err| WorkflowError::partial_apply(task.id(), err))?;
        Ok(task)
    }

    /// Relocates a task between columns (or within one column).
    ///
    /// Executes strictly in order: resolve and verify ancestry, derive the
    /// destination status, persist the task, then rewrite the board lists.
    /// A consistent same-place move short-circuits as a successful no-op.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError`] on validation, authorization, lookup, or
    /// persistence failure. If the task record persisted but the board did
    /// not, the error is [`WorkflowError::PartialApply`] and the stores are
    /// transiently inconsistent until a re-fetch reconciles them.
    pub async fn move_task(&self, request: MoveTaskRequest) -> WorkflowResult<Task> {
        let mut task = self.load_task(request.task).await?;
        self.require_member(request.caller, task.workspace()).await?;

        let mut board = self.load_board(task.board()).await?;
        let plan = Self::plan_move(&board, &task, request)?;
        if plan.already_consistent {
            return Ok(task);
        }

        task.relocate(plan.destination, plan.derived, &*self.clock);
        self.tasks.update(&task).await?;

        // The task record now points at the destination; everything below
        // must either complete or surface as a partial apply.
        board
            .remove_task(request.source, task.id())
            .map_err(|err| WorkflowError::partial_apply(task.id(), err))?;
        board
            .insert_task(plan.destination, task.id(), request.index)
            .map_err(|err| WorkflowError::partial_apply(task.id(), err))?;
        self.boards
            .update(&board)
            .await
            .map_err(|err| WorkflowError::partial_apply(task.id(), err))?;
        Ok(task)
    }

    /// Edits a task's title and/or description.
    ///
    /// Editing a `todo` task automatically promotes it when the board has a
    /// column matching "in progress": the task relocates to the head of that
    /// column and its status follows, as if it had been moved there.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError`] on validation, authorization, lookup, or
    /// persistence failure; the promotion path shares the move path's
    /// partial-apply semantics.
    pub async fn edit_task(&self, request: EditTaskRequest) -> WorkflowResult<Task> {
        let patch = TaskPatch {
            title: request.title.map(Title::new).transpose()?,
            description: request.description,
        };
        let mut task = self.load_task(request.task).await?;
        self.require_member(request.caller, task.workspace()).await?;
        if patch.is_empty() {
            return Ok(task);
        }

        if task.status() == TaskStatus::Todo {
            let board = self.load_board(task.board()).await?;
            let progress = board
                .column_matching(TaskStatus::InProgress)
                .map(|column| column.id());
            if let Some(progress_id) = progress {
                return self.promote(task, patch, board, progress_id).await;
            }
        }

        task.apply_patch(patch, &*self.clock);
        self.tasks.update(&task).await?;
        Ok(task)
    }

    /// Deletes a task, removing its id from its column's list.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError`] when the task does not exist, the caller is
    /// not a member, or persistence fails.
    pub async fn delete_task(&self, caller: UserId, task_id: TaskId) -> WorkflowResult<()> {
        let task = self.load_task(task_id).await?;
        self.require_member(caller, task.workspace()).await?;

        let mut board = self.load_board(task.board()).await?;
        // Scan rather than trust task.column so a record stranded by a
        // partial apply can still be deleted cleanly.
        if let Some(listed) = board.column_of(task_id).map(|column| column.id()) {
            board.remove_task(listed, task_id)?;
            self.boards.update(&board).await?;
        }
        self.tasks.delete(task_id).await?;
        Ok(())
    }

    /// Fetches a board with its columns and their ordered task ids.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError`] when the board does not exist or the caller
    /// is not a member of its workspace.
    pub async fn board(&self, caller: UserId, board_id: BoardId) -> WorkflowResult<Board> {
        let board = self.load_board(board_id).await?;
        self.require_member(caller, board.workspace()).await?;
        Ok(board)
    }

    /// Fetches all tasks owned by a board, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError`] when the board does not exist, the caller
    /// is not a member, or the lookup fails.
    pub async fn tasks_by_board(
        &self,
        caller: UserId,
        board_id: BoardId,
    ) -> WorkflowResult<Vec<Task>> {
        let board = self.load_board(board_id).await?;
        self.require_member(caller, board.workspace()).await?;
        Ok(self.tasks.find_by_board(board_id).await?)
    }

    /// Promotes a `todo` task to the head of the in-progress column as part
    /// of an edit, using the same task-then-board persist order as a move.
    async fn promote(
        &self,
        mut task: Task,
        patch: TaskPatch,
        mut board: Board,
        progress: ColumnId,
    ) -> WorkflowResult<Task> {
        let previous_column = task.column();
        task.apply_patch(patch, &*self.clock);
        task.relocate(progress, Some(TaskStatus::InProgress), &*self.clock);
        self.tasks.update(&task).await?;

        if board.column(previous_column).is_some() {
            board
                .remove_task(previous_column, task.id())
                .map_err(|err| WorkflowError::partial_apply(task.id(), err))?;
        }
        board
            .insert_task(progress, task.id(), 0)
            .map_err(|err| WorkflowError::partial_apply(task.id(), err))?;
        self.boards
            .update(&board)
            .await
            .map_err(|err| WorkflowError::partial_apply(task.id(), err))?;
        Ok(task)
    }

    /// Resolves a move request against the loaded board, verifying ancestry
    /// and deciding whether any write is needed at all.
    fn plan_move(board: &Board, task: &Task, request: MoveTaskRequest) -> WorkflowResult<MovePlan> {
        let source = board
            .column(request.source)
            .ok_or(WorkflowError::ColumnNotFound(request.source))?;
        let destination = board
            .column(request.destination)
            .ok_or(WorkflowError::ColumnNotFound(request.destination))?;
        if task.column() != source.id() {
            return Err(WorkflowError::SourceColumnMismatch {
                task: task.id(),
                column: request.source,
            });
        }

        let already_consistent = request.source == request.destination
            && destination.position_of(task.id()) == Some(request.index);
        Ok(MovePlan {
            destination: destination.id(),
            derived: derive_status(destination.name().as_str()),
            already_consistent,
        })
    }

    /// Inserts into a column list, mapping a post-task-persist failure to a
    /// partial apply.
    fn list_insert(
        board: &mut Board,
        column: ColumnId,
        task: TaskId,
        index: usize,
    ) -> WorkflowResult<()> {
        board
            .insert_task(column, task, index)
            .map_err(|err| WorkflowError::partial_apply(task, err))
    }

    async fn require_member(&self, user: UserId, workspace: WorkspaceId) -> WorkflowResult<()> {
        if self.membership.is_member(user, workspace).await? {
            Ok(())
        } else {
            Err(WorkflowError::Forbidden { user, workspace })
        }
    }

    async fn load_task(&self, task_id: TaskId) -> WorkflowResult<Task> {
        self.tasks
            .find_by_id(task_id)
            .await?
            .ok_or(WorkflowError::TaskNotFound(task_id))
    }

    async fn load_board(&self, board_id: BoardId) -> WorkflowResult<Board> {
        self.boards
            .find_by_id(board_id)
            .await?
            .ok_or(WorkflowError::BoardNotFound(board_id))
    }
}
