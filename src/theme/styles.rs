//! Global CSS styles for the birthday page.
//!
//! Soft blush-to-sky background, pink/purple/blue gradients and frosted
//! glass surfaces. All motion is CSS keyframes.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* PINK (highlights, active navigation, primary actions) */
  --pink-50: #fdf2f8;
  --pink-100: #fce7f3;
  --pink-200: #fbcfe8;
  --pink-400: #f472b6;
  --pink-500: #ec4899;
  --pink-600: #db2777;

  /* PURPLE (headings, icons) */
  --purple-50: #faf5ff;
  --purple-100: #f3e8ff;
  --purple-500: #a855f7;
  --purple-600: #9333ea;
  --purple-800: #6b21a8;

  /* BLUE (gradient tails) */
  --blue-50: #eff6ff;
  --blue-500: #3b82f6;
  --blue-600: #2563eb;

  /* TEXT */
  --text-strong: #1f2937;
  --text-body: #374151;
  --text-muted: #4b5563;
  --text-faint: #6b7280;

  /* GLASS */
  --glass: rgba(255, 255, 255, 0.1);
  --glass-card: rgba(255, 255, 255, 0.9);
  --glass-border: rgba(255, 255, 255, 0.2);

  --font-sans: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;

  --header-height: 4rem;
  --radius-lg: 1rem;
  --radius-md: 0.75rem;

  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 500ms ease-in-out;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  scroll-behavior: smooth;
  scroll-padding-top: var(--header-height);
}

body {
  font-family: var(--font-sans);
  color: var(--text-body);
  line-height: 1.6;
  -webkit-font-smoothing: antialiased;
}

img {
  display: block;
  max-width: 100%;
}

button {
  font: inherit;
  cursor: pointer;
  border: none;
  background: none;
  color: inherit;
}

.page {
  min-height: 100vh;
  overflow-x: hidden;
  background: linear-gradient(to bottom, var(--pink-50), var(--purple-50), var(--blue-50));
}

.container {
  max-width: 72rem;
  margin: 0 auto;
}

.container.narrow {
  max-width: 56rem;
}

.muted {
  color: var(--text-muted);
}

.italic {
  font-style: italic;
}

/* === Gradient Text === */
.gradient-rose,
.gradient-lilac {
  background-clip: text;
  -webkit-background-clip: text;
  color: transparent;
}

.gradient-rose {
  background-image: linear-gradient(to right, var(--pink-600), var(--purple-600));
}

.gradient-lilac {
  background-image: linear-gradient(to right, var(--purple-600), var(--blue-600));
}

/* === Buttons === */
.btn-glow {
  position: relative;
  overflow: hidden;
  padding: 0.75rem 2rem;
  border-radius: 9999px;
  font-weight: 500;
  color: white;
  background-image: linear-gradient(to right, var(--pink-500), var(--purple-600));
  box-shadow: 0 10px 15px -3px rgba(219, 39, 119, 0.25);
  transition: transform var(--transition-normal), box-shadow var(--transition-normal),
    background-position var(--transition-slow);
  background-size: 200% 100%;
}

.btn-glow:hover {
  transform: scale(1.05);
  box-shadow: 0 10px 25px -5px rgba(219, 39, 119, 0.4);
  background-position: 100% 0;
}

.btn-glow:active {
  transform: scale(0.95);
}

.btn-glow.btn-large {
  padding: 1rem 2rem;
}

.btn-ghost {
  padding: 0.25rem 0;
  color: var(--text-muted);
  transition: color var(--transition-fast);
}

.btn-ghost:hover {
  color: var(--pink-500);
}

.btn-floating {
  padding: 0.75rem;
  border-radius: 9999px;
  color: var(--pink-500);
  background: rgba(255, 255, 255, 0.2);
  backdrop-filter: blur(12px);
  border: 1px solid rgba(255, 255, 255, 0.3);
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
  transition: background var(--transition-fast);
}

.btn-floating:hover {
  background: rgba(255, 255, 255, 0.3);
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
}

.close-btn {
  padding: 0.5rem;
  border-radius: 9999px;
  color: black;
  background: rgba(255, 255, 255, 0.3);
  transition: background var(--transition-fast);
}

.close-btn:hover {
  background: white;
}

/* === Header === */
.nav-header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 30;
  background: var(--glass);
  backdrop-filter: blur(12px);
  border-bottom: 1px solid var(--glass-border);
}

.nav-header__inner {
  max-width: 72rem;
  height: var(--header-height);
  margin: 0 auto;
  padding: 0 1rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
  animation: slide-in-left 0.5s ease both;
}

.nav-brand {
  font-size: 1.5rem;
  font-weight: 700;
  background-image: linear-gradient(to right, var(--pink-500), var(--purple-500));
}

.nav-links {
  display: flex;
  gap: 2rem;
}

.nav-link {
  position: relative;
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--text-muted);
  transition: color var(--transition-fast), transform var(--transition-fast);
}

.nav-link:hover {
  transform: scale(1.05);
}

.nav-link.active {
  color: var(--pink-500);
}

.nav-link__underline {
  position: absolute;
  left: 0;
  right: 0;
  bottom: -0.25rem;
  height: 2px;
  border-radius: 9999px;
  background: var(--pink-500);
  animation: grow-x 0.3s ease both;
}

.nav-hamburger {
  display: none;
  color: var(--text-muted);
  transition: color var(--transition-fast);
}

.nav-hamburger:hover {
  color: var(--pink-500);
}

/* === Mobile Menu === */
.mobile-menu {
  position: fixed;
  inset: 0;
  z-index: 40;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.9);
  backdrop-filter: blur(12px);
  animation: fade-in 0.2s ease both;
}

.mobile-menu__panel {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 2rem;
  animation: rise-in 0.3s ease both;
}

.mobile-menu__item {
  font-size: 1.25rem;
  font-weight: 500;
  color: white;
  transition: color var(--transition-fast);
  animation: rise-in 0.3s ease both;
}

.mobile-menu__item.active {
  color: var(--pink-400);
}

.mobile-menu__close {
  margin-top: 1rem;
  color: rgba(255, 255, 255, 0.8);
  background: none;
  border: 1px solid var(--glass-border);
  padding: 0.75rem;
}

/* === Audio Toggle === */
.audio-toggle {
  position: fixed;
  right: 1.5rem;
  bottom: 1.5rem;
  z-index: 50;
  animation: pop-in 0.5s ease 2.5s both;
}

/* === Sections === */
.page-section {
  position: relative;
  padding: 5rem 1rem;
}

.section-heading {
  text-align: center;
  margin-bottom: 3rem;
  animation: rise-in 0.8s ease both;
}

.section-heading__icon {
  display: inline-block;
  margin-bottom: 0.5rem;
  color: var(--purple-500);
  animation: pop-in 0.6s cubic-bezier(0.34, 1.56, 0.64, 1) both;
}

.section-heading__title {
  font-size: 3rem;
  font-weight: 700;
  margin-bottom: 1rem;
}

.section-heading__subtitle {
  max-width: 42rem;
  margin: 0 auto;
  color: var(--text-muted);
}

.card-frame {
  position: relative;
  max-width: 48rem;
  margin: 0 auto;
}

.card-frame::before {
  content: "";
  position: absolute;
  inset: -4px;
  border-radius: var(--radius-lg);
  background-image: linear-gradient(to right, var(--pink-500), var(--purple-600));
  filter: blur(8px);
  opacity: 0.2;
}

.card {
  position: relative;
  padding: 2.5rem;
  border-radius: var(--radius-lg);
  background: var(--glass-card);
  backdrop-filter: blur(12px);
  border: 1px solid rgba(255, 255, 255, 0.5);
  box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
}

/* === Hero === */
.hero {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  padding: 7rem 1rem 5rem;
}

.hero__glow {
  position: absolute;
  inset: 0;
  pointer-events: none;
  background: radial-gradient(circle at 50% 50%, rgba(255, 182, 193, 0.2) 0%, rgba(255, 255, 255, 0) 50%);
  animation: fade-in 1s ease both;
}

.hero__content {
  position: relative;
  z-index: 10;
  max-width: 48rem;
  margin: 0 auto;
  text-align: center;
  animation: rise-in 0.8s ease 0.2s both;
}

.hero__sparkles {
  position: absolute;
  top: 1.25rem;
  right: -5rem;
  color: var(--pink-200);
  opacity: 0.5;
}

.hero__title {
  font-size: 4.5rem;
  font-weight: 700;
  line-height: 1.1;
  margin-bottom: 1.5rem;
}

.hero__recipient {
  background-size: 200% 200%;
  animation: gradient-shift 5s ease infinite alternate;
}

.hero__tagline {
  font-size: 1.25rem;
  color: var(--text-muted);
  margin-bottom: 2rem;
}

.hero__image {
  position: relative;
  max-width: 42rem;
  aspect-ratio: 16 / 9;
  margin: 0 auto;
  overflow: hidden;
  border-radius: var(--radius-lg);
  box-shadow: 0 25px 50px -12px rgba(219, 39, 119, 0.25);
  transform: perspective(1000px) rotateX(5deg);
  animation: rise-in 0.8s ease 0.8s both;
}

.hero__image img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.hero__image-tint {
  position: absolute;
  inset: 0;
  border: 2px solid rgba(255, 255, 255, 0.3);
  border-radius: var(--radius-lg);
  background-image: linear-gradient(to top right, rgba(236, 72, 153, 0.2), rgba(168, 85, 247, 0.2));
}

.hero__cta {
  margin-top: 2.5rem;
  animation: rise-in 0.8s ease 1.4s both;
}

.hero__scroll-hint {
  position: absolute;
  bottom: 2rem;
  left: 50%;
  color: var(--pink-500);
  transform: translateX(-50%);
  animation: bob 1.5s ease-in-out 2s infinite alternate;
}

/* === Special Date === */
.special-date {
  padding: 5rem 1rem;
  background: linear-gradient(to bottom, rgba(255, 255, 255, 0.8), rgba(253, 242, 248, 0.8));
}

.special-date__card {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 2rem;
  align-items: center;
}

.special-date__facts h3 {
  font-size: 1.5rem;
  font-weight: 700;
  color: var(--text-strong);
  margin-bottom: 0.5rem;
}

.fact-list {
  list-style: none;
  margin-top: 1rem;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.fact-list li {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.dot {
  width: 0.5rem;
  height: 0.5rem;
  border-radius: 9999px;
}

.dot-pink { background: var(--pink-500); }
.dot-purple { background: var(--purple-500); }
.dot-blue { background: var(--blue-500); }

.calendar {
  position: relative;
  padding: 1.5rem;
  border-radius: var(--radius-md);
  background-image: linear-gradient(to bottom right, var(--pink-100), var(--purple-100));
}

.calendar__title {
  text-align: center;
  font-size: 1.125rem;
  font-weight: 700;
  color: var(--purple-800);
  margin-bottom: 1rem;
}

.calendar__grid {
  display: grid;
  grid-template-columns: repeat(7, 1fr);
  gap: 0.25rem;
  text-align: center;
}

.calendar__header {
  margin-bottom: 0.5rem;
  font-size: 0.75rem;
  font-weight: 500;
  color: var(--text-faint);
}

.calendar__day {
  padding: 0.5rem;
  font-size: 0.875rem;
  color: var(--text-muted);
}

.calendar__day.highlight {
  border-radius: 9999px;
  font-weight: 700;
  color: white;
  background-image: linear-gradient(to right, var(--pink-500), var(--purple-500));
  animation: pulse 2s ease-in-out infinite;
}

.calendar__sparkle {
  position: absolute;
  top: -1.25rem;
  right: -1.25rem;
  color: var(--pink-500);
  animation: spin-slow 8s linear infinite;
}

/* === Gallery === */
.gallery {
  background: rgba(255, 255, 255, 0.8);
}

.gallery__grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 2rem;
}

.memory-card {
  cursor: pointer;
  animation: rise-in 0.4s ease both;
}

.memory-card__frame {
  position: relative;
  aspect-ratio: 4 / 3;
  padding: 0.5rem;
  overflow: hidden;
  border-radius: var(--radius-md);
  background: white;
  box-shadow: 0 5px 15px rgba(0, 0, 0, 0.1);
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

.memory-card:hover .memory-card__frame {
  transform: translateY(-10px) scale(1.07);
  box-shadow: 0 15px 30px rgba(0, 0, 0, 0.2);
}

.memory-card__frame img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  border-radius: 0.5rem;
  transition: transform var(--transition-slow);
}

.memory-card:hover .memory-card__frame img {
  transform: scale(1.05);
}

.memory-card__shade {
  position: absolute;
  inset: 0.5rem;
  border-radius: 0.5rem;
  background: linear-gradient(to top, rgba(0, 0, 0, 0.7), rgba(0, 0, 0, 0.2), transparent);
  opacity: 0.8;
  transition: opacity var(--transition-normal);
}

.memory-card:hover .memory-card__shade {
  opacity: 1;
}

.memory-card__caption {
  position: absolute;
  left: 0;
  right: 0;
  bottom: 0;
  padding: 1rem 1.5rem;
  font-size: 1.125rem;
  font-weight: 500;
  color: white;
}

.object-bottom { object-position: bottom; }
.object-center { object-position: center; }

/* === Message === */
.message {
  background: linear-gradient(to bottom, rgba(253, 242, 248, 0.8), rgba(250, 245, 255, 0.8));
}

.letter {
  background: rgba(255, 255, 255, 0.8);
}

.letter__bubble {
  position: absolute;
  top: -1.25rem;
  left: -1.25rem;
  color: var(--pink-500);
  animation: bob 3s ease-in-out infinite alternate;
}

.letter__line {
  font-size: 1.125rem;
  color: var(--text-body);
  margin-bottom: 1.5rem;
}

.letter__signature {
  font-size: 1.25rem;
  font-weight: 500;
}

.letter__heart {
  position: absolute;
  right: -1.5rem;
  bottom: -1.5rem;
  color: var(--pink-500);
  animation: heartbeat 3s ease-in-out infinite alternate;
}

/* === Wishes === */
.wishes {
  background: rgba(255, 255, 255, 0.8);
}

.wishes__grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 2rem;
}

.wish-card {
  position: relative;
  animation: rise-in 0.6s ease both;
  transition: transform var(--transition-normal);
}

.wish-card:hover {
  transform: translateY(-10px);
}

.wish-card__glow {
  position: absolute;
  inset: -2px;
  border-radius: var(--radius-md);
  background-image: linear-gradient(to right, var(--pink-500), var(--purple-600));
  filter: blur(6px);
  opacity: 0.3;
  transition: opacity 1s ease;
}

.wish-card:hover .wish-card__glow {
  opacity: 1;
}

.wish-card__body {
  position: relative;
  height: 100%;
  display: flex;
  align-items: flex-start;
  gap: 1rem;
  padding: 2rem;
  border-radius: var(--radius-md);
  background: var(--glass-card);
  border: 1px solid rgba(255, 255, 255, 0.5);
}

.wish-card__icon {
  padding: 0.75rem;
  border-radius: 9999px;
  color: var(--pink-500);
  background-image: linear-gradient(to bottom right, var(--pink-100), var(--purple-100));
}

.wish-card h3 {
  font-size: 1.25rem;
  font-weight: 600;
  color: var(--text-strong);
  margin-bottom: 0.5rem;
}

.wishes__again {
  margin-top: 4rem;
  text-align: center;
}

/* === Footer === */
.page-footer {
  padding: 2rem 0;
  text-align: center;
  font-size: 0.875rem;
  color: var(--text-muted);
  background: var(--glass);
  border-top: 1px solid var(--glass-border);
}

/* === Image Modal === */
.modal-backdrop {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
  background: rgba(0, 0, 0, 0.8);
  backdrop-filter: blur(4px);
  animation: fade-in 0.2s ease both;
}

.modal-panel {
  position: relative;
  max-width: 56rem;
  max-height: 90vh;
  padding: 0.25rem;
  overflow: hidden;
  border-radius: var(--radius-lg);
  background: rgba(255, 255, 255, 0.1);
  border: 1px solid var(--glass-border);
  animation: zoom-in 0.3s cubic-bezier(0.34, 1.56, 0.64, 1) both;
}

.modal-close {
  position: absolute;
  top: 1rem;
  right: 1rem;
  z-index: 10;
}

.modal-image {
  width: 400px;
  height: min(900px, 85vh);
  object-fit: cover;
  border-radius: var(--radius-md);
}

.modal-caption {
  position: absolute;
  left: 0;
  right: 0;
  bottom: 0;
  padding: 1.5rem;
  text-align: center;
  font-size: 1.125rem;
  font-weight: 500;
  color: white;
  background: linear-gradient(to top, rgba(0, 0, 0, 0.8), transparent);
}

/* === Confetti === */
.confetti-overlay {
  position: fixed;
  inset: 0;
  z-index: 60;
  overflow: hidden;
  pointer-events: none;
}

.confetti-piece {
  position: absolute;
  top: -20px;
  opacity: 0;
  animation-name: confetti-fall;
  animation-timing-function: cubic-bezier(0.25, 0.46, 0.45, 0.94);
  animation-fill-mode: forwards;
}

/* === Keyframes === */
@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes rise-in {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes pop-in {
  from { opacity: 0; transform: scale(0); }
  to { opacity: 1; transform: scale(1); }
}

@keyframes zoom-in {
  from { opacity: 0; transform: translateY(20px) scale(0.9); }
  to { opacity: 1; transform: translateY(0) scale(1); }
}

@keyframes slide-in-left {
  from { opacity: 0; transform: translateX(-20px); }
  to { opacity: 1; transform: translateX(0); }
}

@keyframes grow-x {
  from { transform: scaleX(0); }
  to { transform: scaleX(1); }
}

@keyframes bob {
  from { transform: translateY(0); }
  to { transform: translateY(10px); }
}

@keyframes heartbeat {
  from { transform: scale(1) rotate(0deg); }
  to { transform: scale(1.2) rotate(5deg); }
}

@keyframes pulse {
  0%, 100% { transform: scale(1); }
  50% { transform: scale(1.1); }
}

@keyframes spin-slow {
  from { transform: rotate(0deg); }
  to { transform: rotate(360deg); }
}

@keyframes gradient-shift {
  from { background-position: 0% 50%; }
  to { background-position: 100% 50%; }
}

@keyframes confetti-fall {
  0% { opacity: 1; transform: translateY(0) rotate(0deg); }
  85% { opacity: 1; }
  100% { opacity: 0; transform: translateY(105vh) rotate(720deg); }
}

/* === Responsive === */
@media (max-width: 1024px) {
  .gallery__grid {
    grid-template-columns: repeat(2, 1fr);
  }
}

@media (max-width: 768px) {
  .nav-links,
  .hero__sparkles {
    display: none;
  }

  .nav-hamburger {
    display: inline-flex;
  }

  .hero__title {
    font-size: 3rem;
  }

  .hero__image {
    aspect-ratio: auto;
    min-height: 450px;
  }

  .section-heading__title {
    font-size: 1.875rem;
  }

  .special-date__card,
  .gallery__grid,
  .wishes__grid {
    grid-template-columns: 1fr;
  }

  .card {
    padding: 2rem;
  }

  .modal-panel {
    max-height: 75vh;
  }
}
"#;
