//! Integration tests for mount points across mount/unmount cycles.

#[cfg(test)]
mod tests {
    use scrim::{
        Child, Document, Modal, ModalProps, SequentialIds,
        error::Result,
        mount::{MOUNT_ID_PREFIX, MountPoint},
    };

    fn props(open: bool) -> Result<ModalProps> {
        ModalProps::builder()
            .open(open)
            .hide(|| {})
            .child(Child::title("Mounted"))
            .build()
    }

    fn mount_nodes(doc: &Document) -> usize {
        doc.query_all(doc.body(), |el| {
            el.attr("id").is_some_and(|id| id.starts_with(MOUNT_ID_PREFIX))
        })
        .len()
    }

    #[test]
    fn cycles_never_leak_nodes() -> Result<()> {
        let mut doc = Document::new();
        let mut m = Modal::new(&mut doc, props(true)?)?;
        for _ in 0..5 {
            m.mount(&mut doc)?;
            assert_eq!(mount_nodes(&doc), 1);
            assert!(m.is_mounted());
            m.unmount(&mut doc);
            assert_eq!(mount_nodes(&doc), 0);
            assert!(!m.is_mounted());
        }
        Ok(())
    }

    #[test]
    fn each_instance_has_its_own_mount() -> Result<()> {
        let mut doc = Document::new();
        let mut a = Modal::new(&mut doc, props(true)?)?;
        let mut b = Modal::new(&mut doc, props(false)?)?;
        assert_ne!(
            a.mount_point().element_id(),
            b.mount_point().element_id()
        );
        a.mount(&mut doc)?;
        b.mount(&mut doc)?;
        assert_eq!(mount_nodes(&doc), 2);
        a.unmount(&mut doc);
        assert_eq!(mount_nodes(&doc), 1);
        assert!(doc.is_connected(b.mount_point().node()));
        Ok(())
    }

    #[test]
    fn external_removal_is_tolerated() -> Result<()> {
        let mut doc = Document::new();
        let mut m = Modal::new(&mut doc, props(true)?)?;
        m.mount(&mut doc)?;
        let body = doc.body();
        doc.remove_child(body, m.mount_point().node())?;
        m.unmount(&mut doc);
        assert_eq!(mount_nodes(&doc), 0);
        m.mount(&mut doc)?;
        assert_eq!(mount_nodes(&doc), 1);
        Ok(())
    }

    #[test]
    fn external_destroy_is_tolerated() -> Result<()> {
        let mut doc = Document::new();
        let mut m = Modal::new(&mut doc, props(true)?)?;
        m.mount(&mut doc)?;
        doc.destroy(m.mount_point().node())?;
        m.unmount(&mut doc);
        assert!(!m.is_mounted());
        m.destroy(&mut doc);
        assert_eq!(doc.len(), 1);
        Ok(())
    }

    #[test]
    fn unmount_before_mount() -> Result<()> {
        let mut doc = Document::new();
        let mut m = Modal::new(&mut doc, props(true)?)?;
        m.unmount(&mut doc);
        assert!(!m.is_mounted());
        assert!(!doc.is_connected(m.mount_point().node()));
        Ok(())
    }

    #[test]
    fn sequential_ids() -> Result<()> {
        let mut doc = Document::new();
        let mut ids = SequentialIds::new("m");
        let a = MountPoint::create(&mut doc, &mut ids)?;
        let b = MountPoint::create(&mut doc, &mut ids)?;
        assert_eq!(a.element_id(), "root-modal-m0");
        assert_eq!(b.element_id(), "root-modal-m1");
        Ok(())
    }
}
