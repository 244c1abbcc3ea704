//! Keyword-matched legal guidance
//!
//! Picks one of a fixed set of answers by looking for topic keywords in the
//! lower-cased question. Topics are checked in order and the first hit wins.

use cl_core::ports::{CounselPort, CounselQuery};
use cl_core::preferences::LanguageCode;
use tracing::debug;

struct Topic {
    name: &'static str,
    keywords: &'static [&'static str],
    answer: &'static str,
}

const TOPICS: &[Topic] = &[
    Topic {
        name: "property",
        keywords: &["property", "house", "land"],
        answer: "For property disputes, the Transfer of Property Act, 1882 and Registration Act, 1908 are key legislations. You should maintain proper documentation including sale deed, property cards, and tax receipts. For any property transactions, ensure proper due diligence and legal verification.",
    },
    Topic {
        name: "employment",
        keywords: &["job", "employment", "salary"],
        answer: "Employment matters are governed by various labor laws including the Industrial Disputes Act, 1947, and Labour Code on Wages, 2019. For wrongful termination, you can approach Labor Courts. Maintain employment contracts, salary slips, and correspondence as evidence.",
    },
    Topic {
        name: "family",
        keywords: &["marriage", "divorce", "family"],
        answer: "Family matters are governed by personal laws - Hindu Marriage Act for Hindus, Indian Christian Marriage Act for Christians, and Muslim Personal Law for Muslims. For divorce, maintenance, or child custody issues, family courts have jurisdiction.",
    },
    Topic {
        name: "consumer",
        keywords: &["consumer", "product", "service"],
        answer: "Consumer rights are protected under the Consumer Protection Act, 2019. You can file complaints in District Consumer Forums for disputes up to ₹1 crore. Keep purchase receipts, warranty cards, and correspondence with sellers as evidence.",
    },
    Topic {
        name: "criminal",
        keywords: &["crime", "police", "theft"],
        answer: "For criminal matters, the Indian Penal Code (IPC) and Criminal Procedure Code (CrPC) apply. Always report crimes to police immediately. For serious offenses, engage a criminal lawyer. You have the right to bail and legal representation.",
    },
];

const FALLBACK_ANSWER: &str = "I understand you need legal guidance. Could you please provide more specific details about your legal issue? I can help with property law, employment law, family law, consumer rights, criminal law, and other legal matters. Please describe your situation in more detail.";

const TAMIL_NOTE: &str = "\n\n(தமிழில்: இந்த சட்ட வழிகாட்டுதல் உங்கள் மொழியில் கிடைக்கும். மேலும் உதவிக்காக தமிழ் மொழி வழக்கறிஞரை அணுகவும்.)";

const GREETING: &str = "Hello! I'm your AI Legal Counsel assistant. I can help you with legal guidance in Tamil, English, and other regional languages. You can type your questions or use voice input. How can I assist you today?";

#[derive(Debug, Default, Clone, Copy)]
pub struct CannedCounsel;

impl CannedCounsel {
    pub fn new() -> Self {
        Self
    }

    fn topic_for(question: &str) -> Option<&'static Topic> {
        let question = question.to_lowercase();
        TOPICS
            .iter()
            .find(|topic| topic.keywords.iter().any(|k| question.contains(k)))
    }
}

impl CounselPort for CannedCounsel {
    fn respond(&self, query: &CounselQuery<'_>) -> String {
        let topic = Self::topic_for(query.text);
        debug!(
            topic = topic.map_or("default", |t| t.name),
            language = %query.language,
            "Selected counsel answer"
        );

        let mut answer = topic.map_or(FALLBACK_ANSWER, |t| t.answer).to_string();
        if query.language == LanguageCode::Ta {
            answer.push_str(TAMIL_NOTE);
        }
        answer
    }

    fn greeting(&self) -> String {
        GREETING.to_string()
    }
}
