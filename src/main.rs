fn main() {
    resoport::app::cli::run();
}
