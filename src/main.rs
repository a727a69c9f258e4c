fn main() {
    phiprompt::app::cli::run();
}
