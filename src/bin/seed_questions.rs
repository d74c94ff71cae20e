//! Seeds the questions collection with a starter bank spanning the topics,
//! difficulties and companies the frontend filters on. Replaces whatever is
//! already there.

use chrono::Utc;
use mongodb::bson::doc;
use mongodb::Collection;

use prep_server::config::Config;
use prep_server::db::Database;
use prep_server::models::domain::question::{
    calculate_time_estimate, Difficulty, Question, QuestionType,
};

struct Seed {
    id: &'static str,
    text: &'static str,
    question_type: QuestionType,
    options: Option<&'static [&'static str]>,
    correct_answer: &'static str,
    explanation: &'static str,
    ai_answer: &'static str,
    topic: &'static str,
    difficulty: Difficulty,
    source_url: &'static str,
    source_name: &'static str,
    company: &'static str,
}

impl Seed {
    fn into_question(self) -> Question {
        Question {
            id: self.id.to_string(),
            text: self.text.to_string(),
            question_type: self.question_type,
            options: self
                .options
                .map(|opts| opts.iter().map(|o| o.to_string()).collect()),
            correct_answer: self.correct_answer.to_string(),
            explanation: Some(self.explanation.to_string()),
            ai_answer: Some(self.ai_answer.to_string()),
            topic: self.topic.to_string(),
            difficulty: self.difficulty,
            source_url: Some(self.source_url.to_string()),
            source_name: Some(self.source_name.to_string()),
            company: Some(self.company.to_string()),
            time_estimate: calculate_time_estimate(self.text, self.correct_answer),
            created_at: Utc::now(),
        }
    }
}

fn seed_bank() -> Vec<Question> {
    let seeds = vec![
        Seed {
            id: "q1",
            text: "What is the difference between list and tuple in Python?",
            question_type: QuestionType::Descriptive,
            options: None,
            correct_answer: "Lists are mutable (can be changed) while tuples are immutable \
                (cannot be changed after creation). Lists use square brackets [] while tuples \
                use parentheses ().",
            explanation: "This is a fundamental Python concept about data structures.",
            ai_answer: "Lists are mutable, meaning their elements can be modified after \
                creation, while tuples are immutable and cannot be changed. Lists are defined \
                with square brackets [], tuples with parentheses ().",
            topic: "Python",
            difficulty: Difficulty::Easy,
            source_url: "https://www.prepinsta.com/python/",
            source_name: "PrepInsta",
            company: "Google",
        },
        Seed {
            id: "q2",
            text: "Which of the following is used to define a function in Python?",
            question_type: QuestionType::Mcq,
            options: Some(&["function", "def", "define", "func"]),
            correct_answer: "def",
            explanation: "The 'def' keyword is used to define functions in Python.",
            ai_answer: "The 'def' keyword is used to define functions in Python. Example: \
                def my_function(): pass",
            topic: "Python",
            difficulty: Difficulty::Easy,
            source_url: "https://www.indiabix.com/python/",
            source_name: "IndiaBix",
            company: "Microsoft",
        },
        Seed {
            id: "q3",
            text: "What is a closure in JavaScript?",
            question_type: QuestionType::Descriptive,
            options: None,
            correct_answer: "A closure is a function that has access to variables in its outer \
                (enclosing) lexical scope, even after the outer function has returned.",
            explanation: "Closures are a fundamental concept in JavaScript for maintaining state.",
            ai_answer: "A closure in JavaScript is a function that retains access to its outer \
                scope's variables even after the outer function has finished executing.",
            topic: "JavaScript",
            difficulty: Difficulty::Medium,
            source_url: "https://www.prepinsta.com/javascript/",
            source_name: "PrepInsta",
            company: "Amazon",
        },
        Seed {
            id: "q4",
            text: "Which method is used to add an element at the end of an array in JavaScript?",
            question_type: QuestionType::Mcq,
            options: Some(&["push()", "pop()", "shift()", "unshift()"]),
            correct_answer: "push()",
            explanation: "push() adds elements to the end of an array.",
            ai_answer: "The push() method adds one or more elements to the end of an array and \
                returns the new length of the array.",
            topic: "JavaScript",
            difficulty: Difficulty::Easy,
            source_url: "https://www.indiabix.com/javascript/",
            source_name: "IndiaBix",
            company: "Facebook",
        },
        Seed {
            id: "q5",
            text: "What is the time complexity of searching in a balanced Binary Search Tree?",
            question_type: QuestionType::Mcq,
            options: Some(&["O(n)", "O(log n)", "O(n log n)", "O(1)"]),
            correct_answer: "O(log n)",
            explanation: "Balanced BST provides O(log n) search time.",
            ai_answer: "In a balanced Binary Search Tree, search operations have O(log n) time \
                complexity because the tree height is logarithmic in the number of nodes.",
            topic: "Data Structures",
            difficulty: Difficulty::Medium,
            source_url: "https://www.tcyonline.com/",
            source_name: "TCYOnline",
            company: "Apple",
        },
        Seed {
            id: "q6",
            text: "Explain the difference between Stack and Queue data structures.",
            question_type: QuestionType::Descriptive,
            options: None,
            correct_answer: "Stack follows LIFO (Last In First Out) principle where elements \
                are added and removed from the same end. Queue follows FIFO (First In First \
                Out) principle where elements are added at the rear and removed from the front.",
            explanation: "Understanding the fundamental difference between these two linear \
                data structures.",
            ai_answer: "Stack is a LIFO structure where insertion and deletion happen at the \
                top; common operations are push and pop. Queue is a FIFO structure where \
                insertion happens at the rear and deletion at the front.",
            topic: "Data Structures",
            difficulty: Difficulty::Easy,
            source_url: "https://www.prepinsta.com/data-structures/",
            source_name: "PrepInsta",
            company: "Amazon",
        },
        Seed {
            id: "q7",
            text: "What is the best case time complexity of Quick Sort?",
            question_type: QuestionType::Mcq,
            options: Some(&["O(n)", "O(n log n)", "O(n\u{b2})", "O(log n)"]),
            correct_answer: "O(n log n)",
            explanation: "Quick Sort has O(n log n) in best and average cases.",
            ai_answer: "The best case time complexity of Quick Sort is O(n log n), occurring \
                when the pivot divides the array into two equal halves at each step.",
            topic: "Algorithms",
            difficulty: Difficulty::Medium,
            source_url: "https://www.tcyonline.com/",
            source_name: "TCYOnline",
            company: "Netflix",
        },
        Seed {
            id: "q8",
            text: "What is a primary key in a relational database?",
            question_type: QuestionType::Descriptive,
            options: None,
            correct_answer: "A primary key is a column or set of columns that uniquely \
                identifies each row in a table. It cannot contain NULL values and must be unique.",
            explanation: "Primary keys enforce entity integrity in relational databases.",
            ai_answer: "A primary key uniquely identifies each row in a table, cannot be NULL, \
                and is often backed by an index for fast lookups.",
            topic: "Database",
            difficulty: Difficulty::Easy,
            source_url: "https://www.indiabix.com/database/",
            source_name: "IndiaBix",
            company: "Oracle",
        },
        Seed {
            id: "q9",
            text: "Which scheduling algorithm can cause starvation of low-priority processes?",
            question_type: QuestionType::Mcq,
            options: Some(&[
                "Round Robin",
                "First Come First Served",
                "Priority Scheduling",
                "Shortest Job First",
            ]),
            correct_answer: "Priority Scheduling",
            explanation: "Low-priority processes may wait indefinitely under priority scheduling.",
            ai_answer: "Priority Scheduling can starve low-priority processes because higher \
                priority work keeps preempting them; aging is the standard mitigation.",
            topic: "Operating Systems",
            difficulty: Difficulty::Hard,
            source_url: "https://www.tcyonline.com/",
            source_name: "TCYOnline",
            company: "Intel",
        },
        Seed {
            id: "q10",
            text: "Design and explain a system to handle rate limiting in a distributed \
                microservices architecture.",
            question_type: QuestionType::Descriptive,
            options: None,
            correct_answer: "Use a distributed rate limiter with Redis or similar in-memory \
                store. Implement token bucket or sliding window algorithm. Each service checks \
                a centralized counter before processing requests. Use consistent hashing for \
                distribution. Implement circuit breakers for failure handling.",
            explanation: "System design question testing distributed systems knowledge.",
            ai_answer: "A robust distributed rate limiting design combines a centralized \
                counter store (Redis) with a token bucket or sliding window algorithm, rate \
                checks at the API gateway and per service, atomic counter updates, tiered \
                limits, and circuit breakers for graceful degradation.",
            topic: "System Design",
            difficulty: Difficulty::VeryHard,
            source_url: "https://www.reddit.com/r/programming/",
            source_name: "Reddit - Programming",
            company: "Uber",
        },
    ];
    seeds.into_iter().map(Seed::into_question).collect()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let db = Database::connect(&config).await?;

    let collection: Collection<Question> = db.get_collection("questions");
    let questions = seed_bank();

    collection.delete_many(doc! {}).await?;
    collection.insert_many(&questions).await?;

    println!("Seeded {} questions", questions.len());

    let topics: Vec<&str> = {
        let mut topics: Vec<&str> = questions.iter().map(|q| q.topic.as_str()).collect();
        topics.sort();
        topics.dedup();
        topics
    };
    println!("Topics: {}", topics.join(", "));

    Ok(())
}
