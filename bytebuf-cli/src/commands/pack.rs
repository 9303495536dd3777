use anyhow::Context;
use bytebuf::ByteBuffer;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, argh::FromArgs)]
#[argh(
    subcommand,
    name = "pack",
    description = "pack typed fields into a big-endian binary frame"
)]
pub struct Options {
    #[argh(positional, description = "the output file path")]
    pub output: PathBuf,

    #[argh(
        positional,
        description = "the fields to pack, as \"type:value\" pairs, where the type is one of u8, i32, i64, u32, u64, f64, str, or hex"
    )]
    pub fields: Vec<Field>,
}

/// A typed field value to lay out in a frame.
#[derive(Debug)]
pub enum Field {
    U8(u8),
    I32(i32),
    I64(i64),
    U32(u32),
    U64(u64),
    F64(f64),
    Str(String),
    Hex(Vec<u8>),
}

impl Field {
    /// Get the packed size of this field in bytes.
    pub fn size(&self) -> usize {
        match self {
            Self::U8(_) => 1,
            Self::I32(_) => 4,
            Self::I64(_) => 8,
            Self::U32(_) => 4,
            Self::U64(_) => 8,
            Self::F64(_) => 8,
            Self::Str(value) => value.len(),
            Self::Hex(value) => value.len(),
        }
    }

    /// Write this field to the buffer.
    pub fn put(&self, buffer: &mut ByteBuffer<Vec<u8>>) -> Result<(), bytebuf::Error> {
        match self {
            Self::U8(value) => buffer.put_u8(*value)?,
            Self::I32(value) => buffer.put_i32(*value)?,
            Self::I64(value) => buffer.put_i64(*value)?,
            Self::U32(value) => buffer.put_u32(*value)?,
            Self::U64(value) => buffer.put_u64(*value)?,
            Self::F64(value) => buffer.put_f64(*value)?,
            Self::Str(value) => buffer.put_str(value)?,
            Self::Hex(value) => buffer.put_slice(value)?,
        };

        Ok(())
    }
}

impl argh::FromArgValue for Field {
    fn from_arg_value(value: &str) -> Result<Self, String> {
        let (kind, value) = value
            .split_once(':')
            .ok_or_else(|| format!("field \"{value}\" is missing a \"type:\" prefix"))?;

        match kind {
            "u8" => parse_int(value, u8::from_str_radix).map(Self::U8),
            "i32" => parse_int(value, i32::from_str_radix).map(Self::I32),
            "i64" => parse_int(value, i64::from_str_radix).map(Self::I64),
            "u32" => parse_int(value, u32::from_str_radix).map(Self::U32),
            "u64" => parse_int(value, u64::from_str_radix).map(Self::U64),
            "f64" => value
                .parse()
                .map(Self::F64)
                .map_err(|error| format!("float \"{value}\" is invalid: {error}")),
            "str" => Ok(Self::Str(value.to_string())),
            "hex" => parse_hex(value).map(Self::Hex),
            _ => Err(format!("unknown field type \"{kind}\"")),
        }
    }
}

/// Parse an integer, accepting a "0x" prefix for hex.
fn parse_int<T, F>(value: &str, parse: F) -> Result<T, String>
where
    F: Fn(&str, u32) -> Result<T, std::num::ParseIntError>,
{
    let result = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => parse(hex, 16),
        None => parse(value, 10),
    };

    result.map_err(|error| format!("integer \"{value}\" is invalid: {error}"))
}

/// Parse a string of hex digit pairs into bytes.
fn parse_hex(value: &str) -> Result<Vec<u8>, String> {
    if !value.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return Err(format!("hex \"{value}\" contains a non-hex digit"));
    }
    if value.len() % 2 != 0 {
        return Err(format!("hex \"{value}\" has an odd number of digits"));
    }

    (0..value.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&value[i..i + 2], 16)
                .map_err(|error| format!("hex \"{value}\" is invalid: {error}"))
        })
        .collect()
}

pub fn exec(options: Options) -> anyhow::Result<()> {
    let size: usize = options.fields.iter().map(|field| field.size()).sum();
    let size = i64::try_from(size).context("frame size is too large")?;
    let mut buffer = ByteBuffer::allocate(size)
        .with_context(|| format!("failed to allocate a {size} byte frame"))?;

    for field in options.fields.iter() {
        println!("Packing {field:?}");

        field
            .put(&mut buffer)
            .with_context(|| format!("failed to pack field {field:?}"))?;
    }

    let mut output_file = File::options()
        .create_new(true)
        .write(true)
        .open(&options.output)
        .with_context(|| format!("failed to open \"{}\"", options.output.display()))?;
    output_file
        .write_all(buffer.as_slice())
        .with_context(|| format!("failed to write \"{}\"", options.output.display()))?;

    output_file.sync_all()?;

    println!(
        "Packed {} field(s), {} bytes",
        options.fields.len(),
        buffer.position()
    );

    Ok(())
}
