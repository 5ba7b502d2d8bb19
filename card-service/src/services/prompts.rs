//! Prompt templates for the text model.
//!
//! Every prompt instructs the model to answer in Korean; the template
//! wording is the card product's copy.

/// Prompt for a short card phrase addressed to `target`.
pub fn card_phrase(target: &str, sentiment: &str, text_type: &str) -> String {
    format!(
        "모든 대답은 한국어로 대답해줘.\n\
         [{target}께 드릴 문구를 작성하는데, 문구는 {text_type}로 작성해줘.\n\
         {sentiment}을 진심으로 표현하고, 따뜻하고 감동적인 내용으로 구성해줘.\n\
         따옴표나 기타 불필요한 기호 없이 20자 내외로 한문장으로 알려줘. 그리고 이모티콘은 제외해줘.]"
    )
}

/// Prompt for a full letter composed from free-form context.
pub fn ai_letter(context: &str) -> String {
    format!(
        "모든 대답은 한국어로 대답해줘.\n\
         [다음 내용을 바탕으로 편지를 작성해줘:\n\
         {context}\n\
         따뜻하고 감동적인 내용으로 구성해줘.\n\
         \\n\\n을 사용하지 말아줘.\n\
         보내는 사람이 누구인지는 안적어도 돼.]"
    )
}

/// Prompt asking the model to polish a user-written phrase.
pub fn polish_letter(context: &str) -> String {
    format!(
        "모든 대답은 한국어로 대답해줘.\n\
         [다음 문구를 자연스럽고 예쁘게 고쳐줘: \"{context}\"]\n\
         고쳐진 문구만 나오고, 너의 피드백이나 말은 필요 없어."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_phrase_embeds_all_inputs() {
        let prompt = card_phrase("어머니", "고마움", "편지");
        assert!(prompt.contains("어머니께 드릴 문구"));
        assert!(prompt.contains("고마움을 진심으로 표현"));
        assert!(prompt.contains("편지로 작성해줘"));
    }

    #[test]
    fn ai_letter_embeds_context() {
        let prompt = ai_letter("첫 출근을 축하하는 내용");
        assert!(prompt.contains("첫 출근을 축하하는 내용"));
        assert!(prompt.contains("편지를 작성해줘"));
    }

    #[test]
    fn polish_letter_quotes_the_original_phrase() {
        let prompt = polish_letter("고마워요 항상");
        assert!(prompt.contains("\"고마워요 항상\""));
    }
}
