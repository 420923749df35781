mod check_test;
mod top_processes_test;
