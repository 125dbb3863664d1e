//! Legal documents shown in the Privacy and Terms modals

use crate::types::{LegalDoc, LegalSection};

pub const PRIVACY_POLICY: LegalDoc = LegalDoc {
    slug: "privacy",
    title: "Privacy Policy",
    dateline: "LAST UPDATED: OCTOBER 2025",
    sections: &[
        LegalSection {
            heading: "1. Introduction",
            paragraphs: &[
                "Knock Inc. (\"we,\" \"our,\" or \"us\") is committed to protecting your privacy. This Privacy Policy explains how we collect, use, and share your personal information when you use our mobile application and services (collectively, the \"Service\"). By using Knock, you consent to the data practices described in this policy.",
            ],
            bullets: &[],
        },
        LegalSection {
            heading: "2. Information We Collect",
            paragraphs: &[
                "To provide our unique O2O (Online-to-Offline) experience, we collect specific types of data:",
            ],
            bullets: &[
                "Location Data: This is the core of our \"Radar\" feature. We collect precise geolocation data only while the app is in use to detect nearby users. We do not store historical location trails or track you when the app is fully closed.",
                "Identity Data: When you create an account, we may collect verification details (such as phone number or biometrics) to ensure safety. Your full profile (name, photo, bio) is protected by our \"Progressive Disclosure\" system and is only revealed to others upon mutual acceptance of a Knock.",
                "Usage Metrics: We collect anonymous data on interaction patterns to optimize network performance and user experience.",
            ],
        },
        LegalSection {
            heading: "3. How We Use Your Information",
            paragraphs: &[
                "We use your data strictly to:",
                "We strictly do not sell your personal data to third-party advertisers or data brokers.",
            ],
            bullets: &[
                "Facilitate real-time, hyper-local connections.",
                "Verify identity and maintain the safety of the community.",
                "Prevent fraud, spam, and abuse.",
                "Improve the technical infrastructure of the Service.",
            ],
        },
        LegalSection {
            heading: "4. Data Security",
            paragraphs: &[
                "We implement enterprise-grade security measures, including AES-256 encryption for data at rest and TLS 1.3 for data in transit. While we strive to protect your personal information, no method of transmission over the Internet is 100% secure.",
            ],
            bullets: &[],
        },
        LegalSection {
            heading: "5. User Rights",
            paragraphs: &[
                "You have the right to request access to, correction of, or deletion of your personal data at any time directly through the app settings or by contacting our Data Protection Officer.",
            ],
            bullets: &[],
        },
        LegalSection {
            heading: "6. Contact Us",
            paragraphs: &[
                "If you have questions about this policy, please contact us at privacy@knock.app.",
            ],
            bullets: &[],
        },
    ],
};

pub const TERMS_OF_SERVICE: LegalDoc = LegalDoc {
    slug: "terms",
    title: "Terms of Service",
    dateline: "EFFECTIVE DATE: OCTOBER 2025",
    sections: &[
        LegalSection {
            heading: "1. Acceptance of Terms",
            paragraphs: &[
                "By downloading, accessing, or using the Knock mobile application, you agree to be bound by these Terms of Service. If you do not agree to these terms, you must strictly not use the application.",
            ],
            bullets: &[],
        },
        LegalSection {
            heading: "2. Eligibility",
            paragraphs: &[
                "You must be at least 18 years of age to use Knock. By using the Service, you represent and warrant that you meet this eligibility requirement.",
            ],
            bullets: &[],
        },
        LegalSection {
            heading: "3. User Conduct",
            paragraphs: &[
                "You agree to use Knock responsibly. You are strictly prohibited from:",
            ],
            bullets: &[
                "Harassing, stalking, threatening, or intimidating other users.",
                "Impersonating any person or entity.",
                "Using the app for any illegal purposes or solicitation of illegal acts.",
                "Attempting to reverse engineer the location algorithms or API.",
            ],
        },
        LegalSection {
            heading: "4. Real-World Safety & Disclaimer",
            paragraphs: &[
                "IMPORTANT SAFETY NOTICE",
                "Knock facilitates real-world meetups. You acknowledge that you are solely responsible for your interactions with other users. Knock Inc. conducts basic verification but cannot guarantee the behavior, background, or safety of any user offline. Always meet in public places, tell a friend where you are, and trust your instincts.",
            ],
            bullets: &[],
        },
        LegalSection {
            heading: "5. Termination",
            paragraphs: &[
                "We reserve the right to suspend or terminate your access to the Service immediately, without prior notice or liability, for any reason whatsoever, including without limitation if you breach the Terms.",
            ],
            bullets: &[],
        },
        LegalSection {
            heading: "6. Limitation of Liability",
            paragraphs: &[
                "To the maximum extent permitted by applicable law, Knock Inc. shall not be liable for any indirect, incidental, special, consequential, or punitive damages resulting from your access to or use of, or inability to access or use, the Service.",
            ],
            bullets: &[],
        },
        LegalSection {
            heading: "7. Governing Law",
            paragraphs: &[
                "These Terms shall be governed by and construed in accordance with the laws of the United Arab Emirates, without regard to its conflict of law provisions.",
            ],
            bullets: &[],
        },
    ],
};

/// Look up a legal document by slug.
pub fn legal_doc(slug: &str) -> Option<&'static LegalDoc> {
    match slug {
        "privacy" => Some(&PRIVACY_POLICY),
        "terms" => Some(&TERMS_OF_SERVICE),
        _ => None,
    }
}
