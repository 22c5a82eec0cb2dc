use utfconv::utfconv;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    utfconv(std::env::args_os().skip(1).collect())
}
