fn main() {
    dev_setup::app::cli::run();
}
