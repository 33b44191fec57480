use yew::prelude::*;
use yew_router::prelude::*;

use crate::data::{EMAIL, LOCATION};
use crate::Route;

const LAST_UPDATED: &str = "January 1, 2026";

#[derive(Properties, PartialEq)]
struct LegalPageProps {
    title: &'static str,
    children: Children,
}

#[function_component(LegalPage)]
fn legal_page(props: &LegalPageProps) -> Html {
    html! {
        <div class="legal container">
            <style>
                {r#"
                    .legal {
                        max-width: 56rem;
                        padding-bottom: 6rem;
                        color: #a3a3a3;
                        line-height: 1.8;
                    }
                    .legal .back {
                        display: inline-flex;
                        gap: 0.5rem;
                        margin-bottom: 2rem;
                        color: #a3a3a3;
                        text-decoration: none;
                        font-size: 0.875rem;
                    }
                    .legal .back:hover {
                        color: #fff;
                    }
                    .legal h1 {
                        font-size: clamp(2.5rem, 6vw, 4.5rem);
                        color: #fff;
                        margin: 0 0 0.5rem;
                    }
                    .legal .updated {
                        font-family: monospace;
                        font-size: 0.875rem;
                        color: #737373;
                        padding-bottom: 2rem;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .legal h2 {
                        font-size: 1.5rem;
                        color: #fff;
                        margin: 3rem 0 1rem;
                    }
                    .legal strong {
                        color: #fff;
                    }
                    .legal a.mail {
                        color: #c084fc;
                    }
                "#}
            </style>
            <Link<Route> to={Route::Home} classes="back">{"← Back to Home"}</Link<Route>>
            <h1>{props.title}</h1>
            <p class="updated">{format!("Last Updated: {}", LAST_UPDATED)}</p>
            { for props.children.iter() }
        </div>
    }
}

fn mail_link() -> Html {
    html! { <a class="mail" href={format!("mailto:{}", EMAIL)}>{EMAIL}</a> }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <LegalPage title="Privacy Policy">
            <h2>{"1. Introduction"}</h2>
            <p>
                {"Welcome to PixelKode (\"we,\" \"our,\" or \"us\"). We are committed to protecting your personal information and your right to privacy. This Privacy Policy explains how we collect, use, disclose, and safeguard your information when you visit our website or engage with our services."}
            </p>

            <h2>{"2. Information We Collect"}</h2>
            <p>
                {"We collect information that you voluntarily provide to us when you express an interest in obtaining information about us or our products and services, when you participate in activities on the Website, or otherwise when you contact us."}
            </p>
            <ul>
                <li><strong>{"Personal Data: "}</strong>{"Name, email address, phone number, and project details provided via our contact forms."}</li>
                <li><strong>{"Technical Data: "}</strong>{"IP address, browser type, device information, and operating system collected automatically for analytics purposes."}</li>
            </ul>

            <h2>{"3. How We Use Your Information"}</h2>
            <p>{"We use the information we collect or receive:"}</p>
            <ul>
                <li>{"To send you administrative information, such as project proposals, invoices, and updates."}</li>
                <li>{"To respond to user inquiries and offer support."}</li>
                <li>{"To improve our website structure and user experience."}</li>
                <li>{"To enforce our terms, conditions, and policies."}</li>
            </ul>

            <h2>{"4. Third-Party Services"}</h2>
            <p>
                {"We may use third-party services (such as Formspree for email handling or Google Analytics) to help us operate our business. These third parties may have access to your data only to perform these tasks on our behalf and are obligated not to disclose or use it for any other purpose."}
            </p>

            <h2>{"5. Data Security"}</h2>
            <p>
                {"We have implemented appropriate technical and organizational security measures designed to protect the security of any personal information we process. However, please also remember that we cannot guarantee that the internet itself is 100% secure."}
            </p>

            <h2>{"6. Contact Us"}</h2>
            <p>{"If you have questions or comments about this policy, you may email us at:"}</p>
            { mail_link() }
            <p>{"PixelKode HQ"}<br />{LOCATION}</p>
        </LegalPage>
    }
}

#[function_component(TermsAndConditions)]
pub fn terms_and_conditions() -> Html {
    html! {
        <LegalPage title="Terms of Service">
            <h2>{"1. Agreement to Terms"}</h2>
            <p>
                {"These Terms of Service constitute a legally binding agreement made between you, whether personally or on behalf of an entity (\"you\") and PixelKode (\"we,\" \"us,\" or \"our\"), concerning your access to and use of the PixelKode website and services."}
            </p>

            <h2>{"2. Services"}</h2>
            <p>
                {"PixelKode provides digital services including but not limited to Web Development, App Development, UI/UX Design, and Digital Marketing. The specific deliverables for any project will be outlined in a separate proposal or contract agreement."}
            </p>

            <h2>{"3. Intellectual Property"}</h2>
            <p>{"Unless otherwise indicated, the Site and our Services are our proprietary property."}</p>
            <p>
                <strong>{"Client Deliverables: "}</strong>
                {"Upon full payment, the Client is granted full ownership of the final designs, code, and assets created specifically for their project. PixelKode retains the right to use the work for portfolio and marketing purposes unless a Non-Disclosure Agreement (NDA) is signed."}
            </p>

            <h2>{"4. Payment Terms"}</h2>
            <ul>
                <li>{"Project fees are detailed in individual proposals."}</li>
                <li>{"A standard deposit (typically 50%) is required to commence work."}</li>
                <li>{"Final files and live deployment occur only after the remaining balance is settled."}</li>
                <li>{"All payments are non-refundable once work has commenced, except as otherwise provided in a specific service agreement."}</li>
            </ul>

            <h2>{"5. Limitation of Liability"}</h2>
            <p>
                {"In no event will we be liable to you or any third party for any direct, indirect, consequential, exemplary, incidental, special, or punitive damages, including lost profit, lost revenue, loss of data, or other damages arising from your use of the site or our services."}
            </p>

            <h2>{"6. Governing Law"}</h2>
            <p>
                {"These Terms shall be governed by and defined following the laws of India. PixelKode and yourself irrevocably consent that the courts of Andhra Pradesh, India shall have exclusive jurisdiction to resolve any dispute which may arise in connection with these terms."}
            </p>

            <h2>{"7. Contact"}</h2>
            <p>
                {"To resolve a complaint regarding the Site or to receive further information regarding use of the Site, please contact us at:"}
            </p>
            { mail_link() }
        </LegalPage>
    }
}
