/// Defines the directory where the figure files are saved
pub const DEFAULT_OUT_DIR: &str = "/tmp/terzaghi/results";

/// Defines an auxiliary directory where the test result files are saved
pub const DEFAULT_TEST_DIR: &str = "/tmp/terzaghi/test";

/// Defines the directory holding the CSV files exported by the simulation
pub const DEFAULT_DATA_DIR: &str = "data/results";
