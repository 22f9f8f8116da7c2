// Built-in seed records
//
// A small authored set present from process start, so the engine can
// answer before (or without) any external dataset loading.

use super::CorpusRecord;

pub fn seed_records() -> Vec<CorpusRecord> {
    vec![
        CorpusRecord::new(
            "i have been feeling really depressed lately",
            "I'm sorry you're going through this. Depression can make everything feel heavier than it is. Talking to someone you trust, or a professional, can genuinely help - and reaching out like this is already a strong first step.",
        ),
        CorpusRecord::new(
            "i feel anxious all the time and i cannot relax",
            "Anxiety that never switches off is exhausting. Slow breathing can help in the moment: in for four counts, hold for four, out for four. If it keeps interfering with your days, a counselor can help you find what works for you.",
        ),
        CorpusRecord::new(
            "do i need a therapist",
            "Wondering about therapy is really common, and there's no wrong reason to go. If something has been weighing on you for a while, talking it through with a professional can give you tools and perspective that are hard to find alone.",
        ),
        CorpusRecord::new(
            "i feel so lonely and isolated from everyone",
            "Loneliness is painful, and it takes courage to say it out loud. Even one small connection - a message to an old friend, a group around something you enjoy - can start to change how isolated things feel.",
        ),
        CorpusRecord::new(
            "my relationship ended and i am heartbroken",
            "Breakups hurt, and grief over a relationship is real grief. Be patient with yourself - feeling this much means you cared. Lean on the people around you, and give the healing the time it actually needs.",
        ),
        CorpusRecord::new(
            "i am so stressed and overwhelmed with everything",
            "When everything piles up at once, it helps to shrink the picture: one small task, then the next. You don't have to carry all of it today. And if the pressure stays this heavy, talking to someone about it is a strength, not a weakness.",
        ),
    ]
}
