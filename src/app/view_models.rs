use super::*;

impl QuizApp {
    pub fn topic_infos(&self) -> Vec<TopicInfo> {
        self.catalog
            .topics()
            .into_iter()
            .enumerate()
            .map(|(idx, name)| {
                let question_count = self
                    .catalog
                    .questions()
                    .iter()
                    .filter(|q| q.topic == name)
                    .count();
                TopicInfo {
                    idx,
                    name,
                    question_count,
                }
            })
            .collect()
    }
}
