fn main() {
    let text = "kiss \u{1F469}\u{1F3FC}\u{200D}\u{2764}\u{FE0F}\u{200D}\u{1F48B}\u{200D}\u{1F468}\u{1F3FB}, \
                keycap 1\u{FE0F}\u{20E3} but not 1, flags \u{1F1EF}\u{1F1F5}\u{1F3F4}\u{E0067}\u{E0062}\u{E0077}\u{E006C}\u{E0073}\u{E007F}";

    for seq in emoji_seq::match_all(text) {
        print!("{:>3}..{:<3} {} ", seq.start(), seq.end(), seq);
        print_chars(seq.chars());
    }

    for segment in emoji_seq::EMOJI_RE.split(text) {
        println!("{segment:?}");
    }
}

fn print_chars(c: std::str::Chars) {
    for c in c {
        print!("{:X} ", c as u32);
    }
    println!();
}
