fn main() -> std::process::ExitCode {
    futurecipherflow::entry::main(std::env::args_os().skip(1)).into()
}
