fn main() {
    nbglow::cli::handler::parse_and_execute();
}
