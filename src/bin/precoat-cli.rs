use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use precoat::{
    FactoryError, Token, TokenStreamFactory, TreeCodec, ZstdInputDecorator, ZstdOutputDecorator,
};

#[derive(clap::Parser, Debug)]
#[command(name = "precoat-cli", version, about = "Example CLI for precoat")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// tokens <path>: print one token per line
    Tokens {
        /// Input document
        path: PathBuf,
        /// Input is zstd-compressed; decorate the source with a decoder
        #[arg(long)]
        zstd: bool,
    },
    /// tree <path>: parse the document through the tree codec and debug-print it
    Tree {
        /// Input document
        path: PathBuf,
        #[arg(long)]
        zstd: bool,
    },
    /// rewrite <input> <output>: token-level copy, optionally (de)compressing either side
    Rewrite {
        /// Input document
        input: PathBuf,
        /// Output document
        output: PathBuf,
        /// Input is zstd-compressed
        #[arg(long)]
        zstd_in: bool,
        /// Compress the output at this zstd level
        #[arg(long)]
        zstd_out: Option<i32>,
    },
}

fn reader_factory(zstd: bool) -> TokenStreamFactory {
    let mut f = TokenStreamFactory::default();
    if zstd {
        f.set_input_decorator(Some(Arc::new(ZstdInputDecorator)));
    }
    f
}

fn run(cmd: Cmd) -> Result<(), FactoryError> {
    match cmd {
        Cmd::Tokens { path, zstd } => {
            let f = reader_factory(zstd);
            let mut r = f.reader_from_path(&path)?;
            while let Some(tok) = r.next_token()? {
                match tok {
                    Token::Str(s) => println!("str   {s:?}"),
                    Token::Int(i) => println!("int   {i}"),
                    Token::Float(x) => println!("float {x}"),
                    Token::Bool(b) => println!("bool  {b}"),
                    Token::Null => println!("null"),
                    other => println!("punct {other:?}"),
                }
            }
            Ok(())
        }
        Cmd::Tree { path, zstd } => {
            let mut f = reader_factory(zstd);
            f.set_codec(Some(Arc::new(TreeCodec::new())));
            let codec = f.codec().expect("codec was just set");
            let mut r = f.reader_from_path(&path)?;
            let value = codec.read_value(&mut r)?;
            println!("{value:#?}");
            Ok(())
        }
        Cmd::Rewrite {
            input,
            output,
            zstd_in,
            zstd_out,
        } => {
            let rf = reader_factory(zstd_in);
            let mut wf = TokenStreamFactory::default();
            if let Some(level) = zstd_out {
                wf.set_output_decorator(Some(Arc::new(ZstdOutputDecorator::new(level))));
            }

            let mut r = rf.reader_from_path(&input)?;
            let mut w = wf.writer_to_path(&output)?;
            let mut n = 0u64;
            while let Some(tok) = r.next_token()? {
                w.write_token(&tok)?;
                n += 1;
            }
            w.finish()?;
            eprintln!("rewrote {n} tokens -> {}", output.display());
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli.cmd) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
