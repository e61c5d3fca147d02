//! Marketing sections without interactive state.

use yew::prelude::*;

use crate::config;
use crate::content::{CLUSTER_FEATURES, MARKET_POINTS, MARKET_STATS, PILOTS};

fn bolt_icon(class: &'static str) -> Html {
    html! {
        <svg class={class} viewBox="0 0 24 24" role="img" aria-hidden="true">
            <path d="M13 2L3 14h7l-1 8 12-14h-7l-1-6z" fill="currentColor" />
        </svg>
    }
}

fn stroke_icon(class: &'static str, paths: &[&'static str]) -> Html {
    html! {
        <svg class={class} viewBox="0 0 24 24" role="img" aria-hidden="true">
            { paths.iter().map(|d| html! {
                <path d={*d} fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" />
            }).collect::<Html>() }
        </svg>
    }
}

#[function_component(HelpSection)]
pub fn help_section() -> Html {
    html! {
        <section class="help" aria-label="How can we help?">
            <div class="helpInner">
                <h2 class="helpTitle">{"How can we help?"}</h2>

                <div class="helpGrid">
                    <div class="helpCard helpProblem">
                        <div class="helpIconWrap" aria-hidden="true">
                            <div class="helpIconDot" />
                        </div>
                        <div class="helpHeading">{"The Problem"}</div>
                        <div class="helpBody">
                            {"Stranded EV drivers face towing costs averaging $200+ and hours of stress. Current infrastructure gaps leave drivers vulnerable."}
                        </div>
                    </div>

                    <div class="helpCard helpSolution">
                        <div class="helpIconWrap" aria-hidden="true">
                            { bolt_icon("helpIconBolt") }
                        </div>
                        <div class="helpHeading">{"Our Solution"}</div>
                        <div class="helpBody">
                            {"EV Buddy's patent-pending V2V rapid charger lets any EV share range instantly. No tow truck needed, just power on demand."}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

struct Step {
    title: &'static str,
    body: &'static str,
    accent: &'static str,
    icon: &'static [&'static str],
}

const STEPS: [Step; 5] = [
    Step {
        title: "Connect Donor",
        body: "Donor EV plugs securely into EV Buddy charger securely.",
        accent: "worksIconPurple",
        icon: &["M10 3h4a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2h-4a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z", "M12 18h.01"],
    },
    Step {
        title: "Power Transfer",
        body: "Donor EV plugs start charging EV Buddy charging port.",
        accent: "worksIconTeal",
        icon: &["M7 7h7a4 4 0 0 1 0 8H9", "M10 4l-3 3 3 3", "M17 20l3-3-3-3"],
    },
    Step {
        title: "Vehicle Ready",
        body: "Energy flows at ≈ 1 mile gain speed - mile minute rate.",
        accent: "worksIconTeal",
        icon: &["M13 2L3 14h7l-1 8 12-14h-7l-1-6z"],
    },
    Step {
        title: "Vehicle Ready",
        body: "Recipient EV battery gains sufficient needed.",
        accent: "worksIconPurple",
        icon: &["M7 7h10", "M7 17h10", "M7 7l-2 2 2 2", "M17 17l2-2-2-2"],
    },
    Step {
        title: "Back on Road",
        body: "Unplug and drive away - no tow truck needed!",
        accent: "worksIconTeal",
        icon: &["M8 7h8a2 2 0 0 1 2 2v6a2 2 0 0 1-2 2H8a2 2 0 0 1-2-2V9a2 2 0 0 1 2-2z", "M18 10h2v4h-2", "M9 12h6"],
    },
];

#[function_component(WorksSection)]
pub fn works_section() -> Html {
    html! {
        <section id="services" class="works" aria-label="How EVChargeShare Works">
            <div class="worksInner">
                <h2 class="worksTitle">{"How EVChargeShare Works"}</h2>
                <p class="worksSub">{"Simple steps to get you back on the road."}</p>

                <div class="worksFlow" role="list" aria-label="EVChargeShare steps">
                    { STEPS.iter().map(|step| html! {
                        <div class="worksStep" role="listitem">
                            <div class={classes!("worksIcon", step.accent)} aria-hidden="true">
                                { stroke_icon("worksSvg", step.icon) }
                            </div>
                            <div class="worksStepTitle">{step.title}</div>
                            <div class="worksStepBody">{step.body}</div>
                        </div>
                    }).collect::<Html>() }
                </div>
            </div>
        </section>
    }
}

const SERVICES: [(&str, &str, &[&str]); 6] = [
    (
        "EVChargeShare (V2V)",
        "Our patent-pending portable V2V fast DC charging system allows for Charger-as-a-Service (CaaS). Get a mile of range every minute.",
        &["M13 2L3 14h7l-1 8 12-14h-7l-1-6z"],
    ),
    (
        "Installation Services",
        "Future-ready charging hubs with dynamic power allocation, 32-inch multimedia touch screens, and smart cable management.",
        &["M5 7h14", "M5 12h10", "M5 17h14", "M17 10l2 2-2 2"],
    ),
    (
        "EV Buddy Network",
        "A comprehensive app to find chargers, manage charging sessions, and handle payments seamlessly.",
        &["M12 3l9 8h-3v10H6V11H3l9-8z"],
    ),
    (
        "Investment Opportunities",
        "Join the $84B EV market. We are crowdfunding to expand our network and technology.",
        &["M12 3v18", "M7 7c0-2 2-3 5-3s5 1 5 3-2 3-5 3-5 1-5 3 2 3 5 3 5-1 5-3"],
    ),
    (
        "Rent a Charger",
        "Turn your charger into income or find a charger instantly. Join our peer-to-peer charging network.",
        &["M3 16h11", "M14 16l2-6h4l1 3", "M5 18a2 2 0 1 0 4 0a2 2 0 1 0-4 0", "M16 18a2 2 0 1 0 4 0a2 2 0 1 0-4 0"],
    ),
    (
        "Latest News",
        "Stay updated with the latest developments in the EV world and EV Buddy's expansion.",
        &["M6 5h12a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V7a2 2 0 0 1 2-2z", "M7 9h10", "M7 13h7"],
    ),
];

#[function_component(V2vSection)]
pub fn v2v_section() -> Html {
    html! {
        <section class="v2v" aria-label="V2V: The Portable Rapid Charger">
            <div class="v2vInner">
                <h2 class="v2vTitle">
                    {"V2V: The Portable Rapid"}
                    <br />
                    {"Charger"}
                </h2>
                <p class="v2vSub">
                    {"Our innovative V-to-V Smart Jumper Cable technology is designed to eliminate EV charging anxiety, providing a faster, easier, and more cost-efficient solution to build the much-needed EV charging infrastructure."}
                </p>

                <div class="v2vGrid" role="list" aria-label="EV Buddy services">
                    { SERVICES.iter().map(|(title, body, icon)| html! {
                        <div class="v2vCard" role="listitem">
                            <div class="v2vIconTile" aria-hidden="true">
                                { stroke_icon("v2vIcon", icon) }
                            </div>
                            <div class="v2vCardTitle">{*title}</div>
                            <div class="v2vCardBody">{*body}</div>
                        </div>
                    }).collect::<Html>() }
                </div>
            </div>
        </section>
    }
}

#[function_component(ClusterSection)]
pub fn cluster_section() -> Html {
    html! {
        <section id="cluster" class="cluster" aria-label="EVBuddy Cluster">
            <div class="clusterInner">
                <h2 class="clusterTitle">{"EVBuddy Cluster"}</h2>
                <p class="clusterSub">
                    {"The EV Buddy Cluster is a dynamic, future-ready charging hub built for scale, performance, and profitability. Designed for high-demand environments, this advanced, scalable solution transforms EV charging into a profitable business opportunity."}
                </p>

                <div class="clusterGrid" aria-label="EVBuddy Cluster details">
                    <div class="clusterLeft">
                        <div class="clusterKicker">{"Advanced Features"}</div>
                        <div class="clusterCards" role="list" aria-label="Advanced features">
                            { CLUSTER_FEATURES.iter().map(|f| html! {
                                <div key={f.title} class="clusterCard" role="listitem">
                                    <div class="clusterCardTitle">{f.title}</div>
                                    <div class="clusterCardBody">{f.body}</div>
                                </div>
                            }).collect::<Html>() }
                        </div>
                    </div>

                    <div class="clusterRight" aria-label="EVBuddy Cluster image">
                        <div class="clusterImageCard">
                            <img
                                class="clusterImage"
                                src={config::resolve_public("images/Ev_buddy_cluster.png")}
                                alt="EV Buddy Cluster"
                                loading="lazy"
                            />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(PilotsSection)]
pub fn pilots_section() -> Html {
    html! {
        <section class="pilots" aria-label="Pilots Program Planned to Launch">
            <div class="pilotsInner">
                <h2 class="pilotsTitle">
                    {"Pilots Program Planned to"}
                    <br />
                    {"Launch"}
                </h2>
                <p class="pilotsSub">
                    {"Full-Coverage EV Charging Across North America. We are expanding rapidly to serve you better."}
                </p>

                <div class="pilotsGrid" role="list" aria-label="Pilot markets">
                    { PILOTS.iter().map(|p| html! {
                        <div key={p.name} class="pilotsCard" role="listitem">
                            <div class="pilotsIcon" aria-hidden="true">
                                { stroke_icon("pilotsSvg", &[
                                    "M4 6.5c0-.8.7-1.4 1.5-1.4H11c.6 0 1.1.2 1.5.6.4-.4.9-.6 1.5-.6h5.5c.8 0 1.5.6 1.5 1.4v12c0 .7-.7 1.3-1.5 1.3H14c-.6 0-1.1.2-1.5.6-.4-.4-.9-.6-1.5-.6H5.5C4.7 20.4 4 19.8 4 19.1v-12.6z",
                                    "M12 6.1v14",
                                    "M15.2 14.3l1.2 1.2 2.2-2.2",
                                ]) }
                            </div>
                            <div class="pilotsName">{p.name}</div>
                            <div class="pilotsNote">{p.note}</div>
                        </div>
                    }).collect::<Html>() }
                </div>

                <p class="pilotsFooter">
                    {"We are strategically launching in key markets with high EV density to maximize impact and efficiency."}
                </p>
            </div>
        </section>
    }
}

#[function_component(MarketSection)]
pub fn market_section() -> Html {
    html! {
        <section id="investment" class="market" aria-label="Massive Market Infrastructure Opportunity">
            <div class="marketInner">
                <div class="marketGrid">
                    <div class="marketLeft">
                        <h2 class="marketTitle">
                            {"Massive Market"}
                            <br />
                            {"Infrastructure"}
                            <br />
                            {"Opportunity"}
                        </h2>
                        <p class="marketSub">
                            {"The EV revolution is creating a massive infrastructure gap. EV Buddy is positioned to disrupt the market with a hyper-scalable, mobile-first charging network. Invest in the bridge to future mobility."}
                        </p>

                        <div class="marketPoints" role="list" aria-label="Market highlights">
                            { MARKET_POINTS.iter().map(|point| html! {
                                <div key={*point} class="marketPoint" role="listitem">
                                    <span class="marketPointDot" aria-hidden="true" />
                                    <span class="marketPointText">{*point}</span>
                                </div>
                            }).collect::<Html>() }
                        </div>

                        <div class="marketCtaRow">
                            <a class="marketCta" href="#investment">
                                {"Invest in EVBUDDY "}<span class="marketCtaArrow" aria-hidden="true" />
                            </a>
                        </div>
                        <div class="marketFoot">{"Join 100+ early visionaries. Phase 1 reservation closing soon."}</div>
                    </div>

                    <div class="marketRight" aria-label="Market stats">
                        <div class="marketStats" role="list" aria-label="Key market statistics">
                            { MARKET_STATS.iter().map(|s| html! {
                                <div key={s.label} class="marketStat" role="listitem">
                                    <div class="marketStatValue">{s.value}</div>
                                    <div class="marketStatLabel">{s.label}</div>
                                </div>
                            }).collect::<Html>() }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
