macro_rules! log_info {
  ($scenario: expr, $msg: expr) => {
    log::info!("[Scenario {}] {}", $scenario, $msg);
  };
}
macro_rules! log_warn {
  ($scenario: expr, $msg: expr) => {
    log::warn!("[Scenario {}] {}", $scenario, $msg);
  };
}
macro_rules! log_error {
  ($scenario: expr, $msg: expr) => {
    log::error!("[Scenario {}] {}", $scenario, $msg);
  };
}
