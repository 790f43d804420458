/// Directory the genetic algorithm writes its results to.
pub const DEFAULT_OUTPUTS_DIR: &str = "outputs";
/// Number of parallel workers whose results are read.
pub const DEFAULT_WORKER_COUNT: usize = 8;
/// File the genetic algorithm appends its execution times to.
pub const EXEC_TIME_FILE_NAME: &str = "exec_time.txt";

pub const LABEL_SINGLE_THREAD: &str = "Single Thread";
pub const LABEL_WORKER_THREAD_PREFIX: &str = "Worker Thread";

pub const X_AXIS_DESC: &str = "Iteration";
pub const Y_AXIS_DESC: &str = "Found optimal cost";

pub const WINDOW_TITLE: &str = "Genetic algorithm convergence";
pub const WINDOW_SIZE: (f64, f64) = (1024.0, 1024.0);
/// Stroke width of every series, the plotters default is 1.
pub const LINE_WIDTH: u32 = 2;
