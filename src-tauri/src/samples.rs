/// Built-in transcripts for trying the generator without pasting text.
pub const SAMPLE_TRANSCRIPTS: &[&str] = &[
    r#"[PART 1 CONVERSATION]
Receptionist: Good morning, City Library. How can I help you?
Caller: Hello. I'd like to ask about joining the library.
Receptionist: Certainly. Are you a local resident?
Caller: Yes, I've just moved to the area. My name is Sarah Jenkins. That's J-E-N-K-I-N-S.
Receptionist: Okay, Ms. Jenkins. To register, I'll need your address.
Caller: It's 42 West Street, apartment number 3. The postcode is W12 9LP.
Receptionist: Thank you. Do you have a contact number?
Caller: Yes, it's 07700 900461.
Receptionist: Great. Now, for the membership, you can borrow up to 8 books at a time for 3 weeks.
Caller: Oh, I thought it was 2 weeks.
Receptionist: It used to be, but we extended it last month. There is also a small fee for reservation services, roughly 50 pence per item.
Caller: That's fine. What about internet access?
Receptionist: All members get 1 hour free per day on our computers. You just need to book in advance.
Caller: Perfect. When are you open?
Receptionist: We open at 9 AM every day except Sundays, when we're closed. On Mondays and Wednesdays, we stay open late until 8 PM. Other days we close at 5 PM.
Caller: Wonderful. I'll come by tomorrow. Thank you!
Receptionist: You're welcome. Goodbye!"#,
    r#"[PART 4 LECTURE]
Lecturer: Good afternoon, everyone. Today we are going to look at the history of the bicycle and how its design has evolved over the last two centuries. The first forerunner of the bicycle was developed in 1817 by a German baron named Karl von Drais. It didn't have pedals; the rider simply pushed against the ground with their feet. This machine was known as the 'Draisine' or 'running machine' and was constructed almost entirely of wood.

It wasn't until the 1860s that pedals were added to the front wheel by French mechanics. This new design was often called the 'boneshaker' because of its stiff iron frame and wooden wheels wrapped in iron tires, which made for a very uncomfortable ride on the cobblestone streets of the day.

The next major development came in the 1870s with the 'Penny Farthing' or 'High Wheeler'. To increase speed, the front wheel was made much larger than the rear one. While faster, it was dangerous; the rider sat very high up and could easily be thrown over the handlebars if the front wheel hit a rut.

Finally, in 1885, the 'Safety Bicycle' was introduced. This is the direct ancestor of the modern bicycle. It featured two wheels of equal size and a chain drive to the rear wheel. The addition of the pneumatic rubber tire by John Boyd Dunlop in 1888 revolutionized cycling comfort and efficiency, leading to the bicycle boom of the 1890s."#,
];

/// Cycles through [`SAMPLE_TRANSCRIPTS`], wrapping after the last one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleCursor {
    next: usize,
}

impl SampleCursor {
    pub fn advance(&mut self) -> &'static str {
        let sample = SAMPLE_TRANSCRIPTS[self.next];
        self.next = (self.next + 1) % SAMPLE_TRANSCRIPTS.len();
        sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn there_are_at_least_two_samples() {
        assert!(SAMPLE_TRANSCRIPTS.len() >= 2);
        assert!(SAMPLE_TRANSCRIPTS[0].starts_with("[PART 1 CONVERSATION]"));
        assert!(SAMPLE_TRANSCRIPTS[1].starts_with("[PART 4 LECTURE]"));
    }

    #[test]
    fn cursor_period_equals_list_length() {
        let mut cursor = SampleCursor::default();
        let len = SAMPLE_TRANSCRIPTS.len();
        for click in 0..(len * 3) {
            assert_eq!(cursor.advance(), SAMPLE_TRANSCRIPTS[click % len]);
        }
        assert_eq!(cursor, SampleCursor::default());
    }
}
