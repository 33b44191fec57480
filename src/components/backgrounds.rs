//! Decorative, non-interactive page backdrops. Motion is pure CSS; the only
//! script work is scattering particles once on mount.

use web_sys::js_sys::Math;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
struct Particle {
    left: f64,
    top: f64,
    size: f64,
    duration: f64,
    delay: f64,
}

impl Particle {
    fn scatter(min_duration: f64, spread: f64) -> Self {
        Self {
            left: Math::random() * 100.0,
            top: Math::random() * 100.0,
            size: Math::random() * 2.0 + 1.0,
            duration: Math::random() * spread + min_duration,
            delay: Math::random() * 5.0,
        }
    }

    fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; width: {:.1}px; height: {:.1}px; animation-duration: {:.1}s; animation-delay: {:.1}s;",
            self.left, self.top, self.size, self.size, self.duration, self.delay
        )
    }
}

fn render_particles(particles: &[Particle], class: &'static str) -> Html {
    particles
        .iter()
        .map(|p| html! { <div class={class} style={p.style()}></div> })
        .collect()
}

/// Perspective grid scrolling towards the viewer, used behind the home hero.
#[function_component(CyberGrid)]
pub fn cyber_grid() -> Html {
    let particles = use_state(|| (0..20).map(|_| Particle::scatter(10.0, 20.0)).collect::<Vec<_>>());

    html! {
        <div class="cyber-grid">
            <style>
                {r#"
                    .cyber-grid {
                        position: absolute;
                        inset: 0;
                        overflow: hidden;
                        pointer-events: none;
                        z-index: 0;
                        background: #020205;
                    }
                    .cyber-grid-mask {
                        position: absolute;
                        inset: 0;
                        mask-image: linear-gradient(to bottom, transparent 5%, black 40%, black 80%, transparent 95%);
                        -webkit-mask-image: linear-gradient(to bottom, transparent 5%, black 40%, black 80%, transparent 95%);
                    }
                    .cyber-grid-plane {
                        position: absolute;
                        inset: 0;
                        height: 200%;
                        transform-origin: top;
                        background-image:
                            linear-gradient(to right, rgba(124, 58, 237, 0.1) 1px, transparent 1px),
                            linear-gradient(to bottom, rgba(124, 58, 237, 0.1) 1px, transparent 1px);
                        background-size: 64px 64px;
                        transform: perspective(1000px) rotateX(60deg) translateY(-100px) translateZ(-200px);
                        animation: cyber-grid-scroll 1.5s linear infinite;
                    }
                    @keyframes cyber-grid-scroll {
                        from { background-position: 0 0; }
                        to { background-position: 0 64px; }
                    }
                    .cyber-orb {
                        position: absolute;
                        border-radius: 50%;
                        mix-blend-mode: screen;
                        animation: orb-breathe 8s ease-in-out infinite;
                    }
                    .cyber-orb.one {
                        top: -20%;
                        left: -10%;
                        width: 800px;
                        height: 800px;
                        background: rgba(88, 28, 135, 0.2);
                        filter: blur(120px);
                    }
                    .cyber-orb.two {
                        bottom: -10%;
                        right: -10%;
                        width: 600px;
                        height: 600px;
                        background: rgba(79, 70, 229, 0.1);
                        filter: blur(100px);
                        animation-duration: 10s;
                        animation-delay: 1s;
                    }
                    @keyframes orb-breathe {
                        0%, 100% { opacity: 0.3; transform: scale(1); }
                        50% { opacity: 0.5; transform: scale(1.1); }
                    }
                    .cyber-particle {
                        position: absolute;
                        border-radius: 50%;
                        background: #c084fc;
                        box-shadow: 0 0 10px rgba(168, 85, 247, 0.5);
                        opacity: 0;
                        animation: particle-rise linear infinite;
                    }
                    @keyframes particle-rise {
                        0% { opacity: 0; transform: translateY(0) scale(0); }
                        50% { opacity: 0.8; transform: translateY(-100px) scale(1.5); }
                        100% { opacity: 0; transform: translateY(-200px) scale(0); }
                    }
                "#}
            </style>
            <div class="cyber-grid-mask"><div class="cyber-grid-plane"></div></div>
            <div class="cyber-orb one"></div>
            <div class="cyber-orb two"></div>
            { render_particles(&particles, "cyber-particle") }
        </div>
    }
}

/// Fixed ambient backdrop behind every page: auroras, a horizon grid and
/// drifting dust.
#[function_component(NeuralBackground)]
pub fn neural_background() -> Html {
    let particles = use_state(|| (0..15).map(|_| Particle::scatter(15.0, 10.0)).collect::<Vec<_>>());

    html! {
        <div class="neural-bg">
            <style>
                {r#"
                    .neural-bg {
                        position: fixed;
                        inset: 0;
                        overflow: hidden;
                        pointer-events: none;
                        z-index: 0;
                        background: #050505;
                    }
                    .neural-aurora {
                        position: absolute;
                        border-radius: 50%;
                        mix-blend-mode: screen;
                        animation: aurora-drift 12s ease-in-out infinite;
                    }
                    .neural-aurora.lumina {
                        top: -20%;
                        left: -10%;
                        width: 70vw;
                        height: 70vw;
                        background: rgba(88, 28, 135, 0.2);
                        filter: blur(120px);
                    }
                    .neural-aurora.void {
                        top: 20%;
                        right: -10%;
                        width: 60vw;
                        height: 60vw;
                        background: rgba(49, 46, 129, 0.1);
                        filter: blur(140px);
                        animation-duration: 15s;
                        animation-delay: 2s;
                    }
                    @keyframes aurora-drift {
                        0%, 100% { opacity: 0.3; transform: translate(-20px, -20px) scale(1); }
                        50% { opacity: 0.5; transform: translate(20px, 20px) scale(1.2); }
                    }
                    .neural-horizon {
                        position: absolute;
                        inset: 0;
                        opacity: 0.3;
                        background-image:
                            linear-gradient(to right, rgba(255, 255, 255, 0.03) 1px, transparent 1px),
                            linear-gradient(to bottom, rgba(255, 255, 255, 0.03) 1px, transparent 1px);
                        background-size: 4rem 4rem;
                        transform: perspective(1000px) rotateX(20deg) scale(1.5) translateY(-100px);
                        mask-image: radial-gradient(ellipse 60% 50% at 50% 0%, #000 70%, transparent 100%);
                        -webkit-mask-image: radial-gradient(ellipse 60% 50% at 50% 0%, #000 70%, transparent 100%);
                    }
                    .neural-dust {
                        position: absolute;
                        border-radius: 50%;
                        background: rgba(255, 255, 255, 0.3);
                        opacity: 0;
                        animation: dust-float linear infinite;
                    }
                    @keyframes dust-float {
                        0% { opacity: 0; transform: translateY(0); }
                        50% { opacity: 0.6; }
                        100% { opacity: 0; transform: translateY(-20vh); }
                    }
                    .neural-vignette {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, #050505, transparent, rgba(5, 5, 5, 0.8));
                    }
                "#}
            </style>
            <div class="neural-aurora lumina"></div>
            <div class="neural-aurora void"></div>
            <div class="neural-horizon"></div>
            { render_particles(&particles, "neural-dust") }
            <div class="neural-vignette"></div>
        </div>
    }
}
