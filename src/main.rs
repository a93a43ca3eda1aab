fn main() {
    appsetup::run_cli();
}
