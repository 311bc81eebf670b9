use leptos::prelude::*;

use crate::motion::{Motion, SensorOptions, Stagger};

use super::{
    reveal::{use_reveal, Reveal},
    section::SectionHeader,
};

const HIGHLIGHTS: [(&str, &str); 3] = [
    (
        "🔍 Security Focus",
        "Specialized in smart contract audits, circuit security, and formal verification",
    ),
    (
        "🎓 Education & Learning",
        "Continuously learning advanced cryptography, ZK-STARK, and cutting-edge security research",
    ),
    (
        "🏢 Entrepreneurship",
        "Founded CipherShastra and RazzorSec, building security communities and solutions",
    ),
];

const STATS: [(&str, &str); 4] = [
    ("4+", "Years Experience"),
    ("50+", "Security Audits"),
    ("6+", "Certifications"),
    ("2", "Companies Founded"),
];

#[component]
pub fn About() -> impl IntoView {
    let (node_ref, visible) = use_reveal(SensorOptions::default());
    let stagger = Stagger::SLOW;

    view! {
        <section id="about" class="py-24">
            <div node_ref=node_ref class="mx-auto max-w-7xl px-4">
                <Reveal visible motion=Motion::Fade>
                    <Reveal visible delay=stagger.delay(0)>
                        <SectionHeader
                            title="About Me"
                            subtitle="Get to know more about who I am, what I do, and my journey in blockchain security"
                        />
                    </Reveal>
                    <div class="grid lg:grid-cols-3 gap-12">
                        <Reveal visible delay=stagger.delay(1) class="lg:col-span-2">
                            <h3 class="text-2xl font-bold mb-4">"My Story"</h3>
                            <p class="text-base mb-4 leading-relaxed">
                                "I'm a dedicated Blockchain Security Engineer currently working at Matter Labs/zkSync, where I focus on securing zero-knowledge proof systems and smart contracts. My journey in cybersecurity began with a Bachelor's degree in Computer Science from Mithibai College, Mumbai University (2014-2017), where I graduated with a CGPA of 6.7/7.0."
                            </p>
                            <p class="text-base mb-4 leading-relaxed">
                                "With experience at leading security firms like ConsenSys Diligence and CipherShastra, I've conducted numerous security audits on complex protocols, helped teams adopt more secure system designs, and contributed to the blockchain security community through research and education."
                            </p>
                            <p class="text-base mb-4 leading-relaxed">
                                "I'm passionate about creating CTF challenges, advancing cryptographic research, and fostering cybersecurity awareness. When I'm not auditing smart contracts or researching zero-knowledge proofs, you'll find me sharing knowledge through professional talks and building tools to improve the security landscape."
                            </p>
                            <div class="grid md:grid-cols-3 gap-4 mt-8">
                                {HIGHLIGHTS
                                    .iter()
                                    .map(|(title, text)| {
                                        view! {
                                            <div class="bg-brightBlack/30 p-4 rounded-md border-l-4 border-purple">
                                                <h4 class="font-medium mb-2">{*title}</h4>
                                                <p class="text-sm">{*text}</p>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </Reveal>
                        <Reveal visible delay=stagger.delay(2) class="grid grid-cols-2 gap-4 content-start">
                            {STATS
                                .iter()
                                .map(|(number, label)| {
                                    view! {
                                        <div class="text-center p-6 rounded-lg bg-brightBlack/30 border border-muted/30">
                                            <div class="text-3xl font-bold text-cyan">{*number}</div>
                                            <div class="text-sm text-muted mt-1">{*label}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </Reveal>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
