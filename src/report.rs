use painrank::ScoredPost;

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

/// Print the top `limit` scored posts.
pub fn print_top(posts: &[ScoredPost], limit: usize, color: bool) {
    let palette = ansi::Palette::new(color);

    if posts.is_empty() {
        println!("\n{}", palette.dim("No posts matched."));
        return;
    }

    let shown = limit.min(posts.len());
    println!("\n{}", palette.paint(format!("━━━ Top {shown} results ━━━"), ansi::GRAY));

    for (i, scored) in posts.iter().take(limit).enumerate() {
        let title = one_line(&scored.post.title, 70);
        println!(
            "{} {} {}",
            palette.paint(format!("{:2}.", i + 1), ansi::GRAY),
            palette.bold(palette.paint(format!("[{:3}]", scored.score), ansi::GREEN)),
            title,
        );
        println!(
            "    {} {} {} {} {} {}",
            palette.dim("source:"),
            scored.post.source,
            palette.dim("│ kind:"),
            scored.post.kind.as_str(),
            palette.dim("│ author:"),
            scored.post.author,
        );
        println!("    {} {}", palette.dim("signals:"), palette.paint(&scored.breakdown, ansi::CYAN));
        if !scored.post.url.is_empty() {
            println!("    {} {}", palette.dim("link:"), scored.post.url);
        }
        println!();
    }
}

/// Print the verdict for a single ad-hoc text.
pub fn print_single(scored: &ScoredPost, color: bool) {
    let palette = ansi::Palette::new(color);

    let gate = if scored.signals.has_identity() { "identity confirmed" } else { "no identity" };
    println!(
        "\n{} {}",
        palette.bold(palette.paint(format!("Score: {}", scored.score), ansi::GREEN)),
        palette.dim(format!("({gate})")),
    );
    println!("  {} {}", palette.dim("breakdown:"), palette.paint(&scored.breakdown, ansi::CYAN));
    println!("  {} {}", palette.dim("evidence: "), palette.paint(&scored.evidence, ansi::YELLOW));
    println!();
}

/// Print summary statistics for a scored batch.
pub fn print_stats(analyzed: usize, kept: &[ScoredPost], color: bool) {
    let palette = ansi::Palette::new(color);

    println!("{}", palette.paint("━━━ Statistics ━━━", ansi::GRAY));
    println!("  Posts analyzed: {analyzed}");
    println!("  Posts kept:     {}", kept.len());
    if !kept.is_empty() {
        let sum: u32 = kept.iter().map(|p| p.score).sum();
        let max = kept.iter().map(|p| p.score).max().unwrap_or(0);
        println!("  Average score:  {:.1}", sum as f64 / kept.len() as f64);
        println!("  Maximum score:  {max}");
    }
    println!();
}

fn one_line(s: &str, max: usize) -> String {
    let joined = s.split_whitespace().collect::<Vec<_>>().join(" ");
    if joined.chars().count() <= max { joined } else { joined.chars().take(max).collect() }
}
