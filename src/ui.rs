pub fn render_index(show_credit: bool) -> String {
    let credit = if show_credit {
        r#"<p class="credit">Crafted with care by VKrishna04.</p>"#
    } else {
        ""
    };
    INDEX_HTML.replace("{{CREDIT}}", credit)
}

pub fn render_not_found() -> String {
    error_page("404", "This page drifted away", "The page you are looking for does not exist. Take a breath and head back home.")
}

pub fn render_server_error() -> String {
    error_page("500", "Something went wrong", "We hit a snag on our side. Take a breath; it is probably already being looked at.")
}

fn error_page(code: &str, title: &str, detail: &str) -> String {
    ERROR_HTML
        .replace("{{CODE}}", code)
        .replace("{{TITLE}}", title)
        .replace("{{DETAIL}}", detail)
}

const ERROR_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{CODE}} - Relax</title>
  <style>
    body {
      margin: 0;
      min-height: 100vh;
      display: grid;
      place-items: center;
      background: linear-gradient(135deg, #e8f4f8, #d7ecf5 60%, #eef7f2 100%);
      color: #27404e;
      font-family: "Trebuchet MS", sans-serif;
      text-align: center;
      padding: 24px;
    }
    .code {
      font-size: 5rem;
      font-weight: 700;
      margin: 0;
      color: #4f8aa8;
    }
    h1 {
      margin: 8px 0 12px;
      font-size: 1.6rem;
    }
    p {
      margin: 0 0 24px;
      color: #5d7482;
    }
    a {
      display: inline-block;
      padding: 12px 28px;
      border-radius: 999px;
      background: #4f8aa8;
      color: white;
      text-decoration: none;
      font-weight: 600;
    }
  </style>
</head>
<body>
  <main>
    <p class="code">{{CODE}}</p>
    <h1>{{TITLE}}</h1>
    <p>{{DETAIL}}</p>
    <a href="/">Back to calm</a>
  </main>
</body>
</html>
"#;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <meta name="description" content="Take a break with calming quotes, GIFs, memes, and a guided breathing exercise." />
  <title>Relax - Stress Buster</title>
  <style>
    :root {
      --bg-1: #e8f4f8;
      --bg-2: #d7ecf5;
      --ink: #27404e;
      --accent: #4f8aa8;
      --accent-soft: #9cc6d9;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(39, 64, 78, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #eef7f2 60%, #f2f9fb 100%);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(760px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    header {
      text-align: center;
      display: grid;
      gap: 6px;
    }

    h1 {
      margin: 0;
      font-size: clamp(2rem, 4vw, 2.6rem);
    }

    .subtitle {
      margin: 0;
      color: #5d7482;
    }

    .card {
      background: white;
      border-radius: 20px;
      padding: 22px;
      border: 1px solid rgba(39, 64, 78, 0.08);
      display: grid;
      gap: 12px;
    }

    .card h2 {
      margin: 0;
      font-size: 1.2rem;
      color: var(--accent);
    }

    blockquote {
      margin: 0;
      font-size: 1.2rem;
      line-height: 1.5;
      min-height: 2.4em;
    }

    cite {
      color: #5d7482;
      font-size: 0.95rem;
    }

    .media img {
      width: 100%;
      border-radius: 14px;
      display: block;
      min-height: 120px;
      background: var(--bg-2);
    }

    .media figcaption {
      margin-top: 8px;
      color: #5d7482;
      font-size: 0.9rem;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 22px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
      justify-self: start;
    }

    button:active {
      transform: scale(0.98);
    }

    .breathing {
      text-align: center;
    }

    .breath-circle {
      width: 120px;
      height: 120px;
      margin: 12px auto;
      border-radius: 50%;
      background: var(--accent-soft);
      transition: transform 4s ease-in-out;
    }

    .breath-circle.in {
      transform: scale(1.5);
    }

    .breath-label {
      min-height: 1.4em;
      color: #5d7482;
    }

    footer {
      text-align: center;
      color: #7b8f9b;
      font-size: 0.85rem;
    }

    .credit {
      margin: 4px 0 0;
    }

    @media (max-width: 600px) {
      .app {
        padding: 26px 20px;
      }
      button {
        justify-self: stretch;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Relax</h1>
      <p class="subtitle">Take a moment. Breathe. Let the stress go.</p>
    </header>

    <section class="card">
      <h2>A thought for you</h2>
      <blockquote id="quote-text">&hellip;</blockquote>
      <cite id="quote-author"></cite>
      <button id="quote-btn" type="button">New quote</button>
    </section>

    <section class="card">
      <h2>Something calming</h2>
      <figure class="media" id="gif-box">
        <img id="gif-img" alt="A calming GIF" />
      </figure>
      <button id="gif-btn" type="button">New GIF</button>
    </section>

    <section class="card">
      <h2>A little smile</h2>
      <figure class="media" id="meme-box">
        <img id="meme-img" alt="A wholesome meme" />
        <figcaption id="meme-title"></figcaption>
      </figure>
      <button id="meme-btn" type="button">New meme</button>
    </section>

    <section class="card breathing">
      <h2>Guided breathing</h2>
      <div class="breath-circle" id="breath-circle"></div>
      <p class="breath-label" id="breath-label">Press start and follow the circle.</p>
      <button id="breath-btn" type="button">Start breathing</button>
    </section>

    <footer>
      <p>Everything here is free to use. Be kind to yourself.</p>
      {{CREDIT}}
    </footer>
  </main>

  <script>
    const quoteText = document.getElementById('quote-text');
    const quoteAuthor = document.getElementById('quote-author');
    const gifImg = document.getElementById('gif-img');
    const memeImg = document.getElementById('meme-img');
    const memeTitle = document.getElementById('meme-title');
    const breathCircle = document.getElementById('breath-circle');
    const breathLabel = document.getElementById('breath-label');
    const breathBtn = document.getElementById('breath-btn');

    let breathTimer = null;

    const loadQuote = async () => {
      quoteText.textContent = '…';
      quoteAuthor.textContent = '';
      try {
        const res = await fetch('/api/quote');
        const data = await res.json();
        quoteText.textContent = data.text;
        quoteAuthor.textContent = '— ' + (data.author || 'Anonymous');
      } catch {
        quoteText.textContent = 'Could not load a quote right now.';
      }
    };

    const loadGif = async () => {
      try {
        const res = await fetch('/api/gif');
        const data = await res.json();
        gifImg.src = data.url;
      } catch {
        gifImg.alt = 'Could not load a GIF right now.';
      }
    };

    const loadMeme = async () => {
      memeTitle.textContent = '';
      try {
        const res = await fetch('/api/meme');
        const data = await res.json();
        memeImg.src = data.url;
        if (data.title) {
          memeTitle.textContent = data.title;
        }
      } catch {
        memeTitle.textContent = 'Could not load a meme right now.';
      }
    };

    const breatheStep = (cycle) => {
      if (cycle >= 3) {
        breathLabel.textContent = 'Well done. Feel free to go again.';
        breathCircle.classList.remove('in');
        breathTimer = null;
        return;
      }
      breathLabel.textContent = 'Breathe in…';
      breathCircle.classList.add('in');
      breathTimer = setTimeout(() => {
        breathLabel.textContent = 'Breathe out…';
        breathCircle.classList.remove('in');
        breathTimer = setTimeout(() => breatheStep(cycle + 1), 4000);
      }, 4000);
    };

    breathBtn.addEventListener('click', () => {
      if (breathTimer) {
        clearTimeout(breathTimer);
      }
      breatheStep(0);
    });

    document.getElementById('quote-btn').addEventListener('click', loadQuote);
    document.getElementById('gif-btn').addEventListener('click', loadGif);
    document.getElementById('meme-btn').addEventListener('click', loadMeme);

    loadQuote();
    loadGif();
    loadMeme();
  </script>
</body>
</html>
"#;
