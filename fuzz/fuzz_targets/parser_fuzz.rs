#![no_main]
use libfuzzer_sys::fuzz_target;

const COMMANDS: &[&str] = &["to-ascii", "to-unicode", "config"];
const FLAGS: &[&str] = &[
    "--url",
    "--keep-case",
    "--keep-going",
    "--json",
    "-q",
    "-v",
    "-vv",
    "-i",
    "--charset",
];
const CHARSETS: &[&str] = &["utf-8", "shift_jis", "gbk", "latin1", "utf-16be", "replacement"];

// First byte picks the subcommand; each following byte either appends a
// known flag, a charset label, or a whitespace token of the remaining text.
fuzz_target!(|data: &[u8]| {
    let Some((&first, rest)) = data.split_first() else {
        return;
    };
    let mut args = vec![COMMANDS[first as usize % COMMANDS.len()].to_string()];

    let text = String::from_utf8_lossy(rest);
    let mut tokens = text.split_whitespace();
    for &b in rest.iter().take(24) {
        match b % 4 {
            0 => args.push(FLAGS[(b as usize / 4) % FLAGS.len()].to_string()),
            1 => args.push(CHARSETS[(b as usize / 4) % CHARSETS.len()].to_string()),
            _ => match tokens.next() {
                Some(tok) => args.push(tok.to_string()),
                None => break,
            },
        }
    }
    idnconv::cli::fuzz_try_parse_args(&args);
});
