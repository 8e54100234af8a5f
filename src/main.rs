fn main() {
    file_explorer_lib::run()
}
