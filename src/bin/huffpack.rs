use huffpack::{Compression, Huffman};
use std::env;
use std::fs;
use std::process;

fn usage() -> ! {
    eprintln!("usage: huffpack <encode|decode> <input> <output>");
    process::exit(2);
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let [mode, input, output] = args.as_slice() else {
        usage();
    };

    let codec = Huffman::new();
    let data = match fs::read(input) {
        Ok(data) => data,
        Err(err) => {
            eprintln!("failed to read {}: {}", input, err);
            process::exit(1);
        }
    };

    let result = match mode.as_str() {
        "encode" => codec.compress(&data),
        "decode" => codec.decompress(&data),
        _ => usage(),
    };

    let out = match result {
        Ok(out) => out,
        Err(err) => {
            eprintln!("{} failed: {}", mode, err);
            process::exit(1);
        }
    };

    if let Err(err) = fs::write(output, &out) {
        eprintln!("failed to write {}: {}", output, err);
        process::exit(1);
    }
    println!("{}: {} -> {} bytes", mode, data.len(), out.len());
}
