fn main() {
    timetracker_frontend::start();
}
