fn main() {
    wabulk::app::cli::run();
}
