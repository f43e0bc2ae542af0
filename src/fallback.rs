use rand::Rng;

/// Local quotes served when both quote upstreams fail.
pub const FALLBACK_QUOTES: &[&str] = &[
    "Breathe. This too shall pass.",
    "You are stronger than you think.",
    "One step at a time.",
    "Peace comes from within. Do not seek it without.",
    "The present moment is all you ever have.",
    "Inhale confidence, exhale doubt.",
    "You are doing better than you think.",
    "Calmness is the cradle of power.",
    "Let it go. Let it be.",
    "Every moment is a fresh beginning.",
    "The quieter you become, the more you can hear.",
    "Smile, breathe, and go slowly.",
    "Be gentle with yourself.",
    "This moment is your life.",
    "Find peace in the chaos.",
];

/// Local calming GIFs served when Giphy is disabled or unreachable.
pub const FALLBACK_GIFS: &[&str] = &[
    "https://media.giphy.com/media/3o6ZsW9p2xX4k1zYxq/giphy.gif",
    "https://media.giphy.com/media/l0MYt5jPR6QX5pnqM/giphy.gif",
    "https://media.giphy.com/media/xT0xeJpnrWC4XWblEk/giphy.gif",
    "https://media.giphy.com/media/mlvseq9yvZhba/giphy.gif",
    "https://media.giphy.com/media/MDJ9IbxxvDUQM/giphy.gif",
];

/// Topic tags sent to the Giphy random endpoint.
pub const GIF_TAGS: &[&str] = &["calming", "relaxing", "peaceful", "nature", "meditation"];

pub fn random_quote() -> &'static str {
    pick(FALLBACK_QUOTES)
}

pub fn random_gif() -> &'static str {
    pick(FALLBACK_GIFS)
}

pub fn random_gif_tag() -> &'static str {
    pick(GIF_TAGS)
}

fn pick(pool: &[&'static str]) -> &'static str {
    pool[rand::thread_rng().gen_range(0..pool.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_quote_comes_from_pool() {
        for _ in 0..32 {
            assert!(FALLBACK_QUOTES.contains(&random_quote()));
        }
    }

    #[test]
    fn random_gif_comes_from_pool() {
        for _ in 0..32 {
            let url = random_gif();
            assert!(FALLBACK_GIFS.contains(&url));
            assert!(url.starts_with("https://"));
        }
    }

    #[test]
    fn random_tag_comes_from_fixed_set() {
        for _ in 0..32 {
            assert!(GIF_TAGS.contains(&random_gif_tag()));
        }
    }

    #[test]
    fn pools_are_populated() {
        assert_eq!(FALLBACK_QUOTES.len(), 15);
        assert_eq!(FALLBACK_GIFS.len(), 5);
        assert_eq!(GIF_TAGS.len(), 5);
    }
}
