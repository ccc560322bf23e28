fn main() {
    wfsmoke::app::cli::run();
}
