/// Maximum length for task names, in characters.
pub const MAX_TASK_NAME_LEN: usize = 100;

/// Fixed textual format of due dates, in and out (`yyyy-MM-ddTHH:mm:ss`).
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Length of a due date rendered with [`DUE_DATE_FORMAT`].
pub const DUE_DATE_LEN: usize = 19;

/// Wire names of the payload fields.
pub const TASK_NAME_FIELD: &str = "taskName";
pub const IS_COMPLETED_FIELD: &str = "isCompleted";
pub const DUE_DATE_FIELD: &str = "dueDate";
