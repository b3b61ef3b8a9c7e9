use diesel::prelude::*;

use crate::domain::mention::Mention;
use crate::models::mention::NewMention;
use crate::repository::{DieselRepository, MentionWriter, RepositoryResult};

impl MentionWriter for DieselRepository {
    fn store_mentions(&self, mentions: &[Mention]) -> RepositoryResult<usize> {
        use crate::schema::mentions;

        if mentions.is_empty() {
            return Ok(0);
        }

        let mut conn = self.conn()?;

        let mut inserted = 0;
        for mention in mentions {
            let row = NewMention::from(mention);
            // The unique (source, link) index makes conflicting rows no-ops;
            // any other failure is logged and the remaining inserts proceed.
            match diesel::insert_into(mentions::table)
                .values(&row)
                .on_conflict_do_nothing()
                .execute(&mut conn)
            {
                Ok(count) => inserted += count,
                Err(e) => log::error!("Failed to store mention {:?}: {e}", row.link),
            }
        }
        Ok(inserted)
    }
}
